use druid::widget::{CrossAxisAlignment, Flex, Label, MainAxisAlignment};
use druid::{theme, AppLauncher, Color, LocalizedString, Widget, WidgetExt, WindowDesc};

use druid_color_wheel_widget::spinning::{SpinController, WheelData};
use druid_color_wheel_widget::wheel::ColorWheel;

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const BACKGROUND: Color = Color::rgb8(0x34, 0x3a, 0x40);
pub const INFO_TEXT_SIZE: f64 = 16.0;

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let main_window = WindowDesc::new(make_ui())
        .window_size((400.0, 480.0))
        .title(LocalizedString::new("Color Wheel"));

    let data = WheelData::new();

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, BACKGROUND);
            env.set(theme::TEXT_COLOR, Color::WHITE);
        })
        .log_to_console()
        .launch(data)
        .expect("launch failed");
}

fn make_ui() -> impl Widget<WheelData> {
    let wheel = ColorWheel::new().controller(SpinController::new());

    Flex::column()
        .with_child(wheel)
        .with_child(make_info_box())
        .main_axis_alignment(MainAxisAlignment::Center)
        .cross_axis_alignment(CrossAxisAlignment::Center)
}

fn make_info_box() -> impl Widget<WheelData> {
    Flex::column()
        .with_child(
            Label::new(|data: &WheelData, _: &_| {
                format!("Current Color: {}", data.state.current_color)
            })
            .with_text_size(INFO_TEXT_SIZE),
        )
        .with_child(
            Label::new(|data: &WheelData, _: &_| {
                format!("Current Angle: {}", data.state.current_angle)
            })
            .with_text_size(INFO_TEXT_SIZE),
        )
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .padding(15.0)
}
