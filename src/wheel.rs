//! The wheel widget: four color segments rotating under a fixed pointer.
///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::kurbo::{Circle, CircleSegment};
use druid::{
    BoxConstraints, Color, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx,
    PaintCtx, Point, Rect, RenderContext, Size, UpdateCtx, Widget,
};

use crate::spinning::{SpinDataAccess, WheelData};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// ColorWheel
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub const WHEEL_DIAMETER: f64 = 300.0;
pub const RIM_WIDTH: f64 = 2.0;
pub const RIM_COLOR: Color = Color::rgb8(0xce, 0xd4, 0xda);
const POINTER_SIZE: Size = Size::new(10.0, 30.0);

/// Paints the segment table as a pie, rotated by the current rotation, with a
/// fixed black pointer at 12 o'clock. Gesture handling lives in
/// [`SpinController`](crate::spinning::SpinController); wrap the wheel with it
/// to make it spin.
pub struct ColorWheel {
    diameter: f64,
}

impl ColorWheel {
    pub fn new() -> Self {
        Self {
            diameter: WHEEL_DIAMETER,
        }
    }

    pub fn with_diameter(diameter: f64) -> Self {
        Self { diameter }
    }
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget<WheelData> for ColorWheel {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut WheelData, _env: &Env) {}

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &WheelData,
        _env: &Env,
    ) {
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &WheelData, data: &WheelData, _env: &Env) {
        if !old_data.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &WheelData,
        _env: &Env,
    ) -> Size {
        bc.constrain(Size::new(self.diameter, self.diameter))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &WheelData, _env: &Env) {
        let size = ctx.size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let radius = size.width.min(size.height) / 2.0 - RIM_WIDTH;
        let rotation = data.get_rotation().to_radians();

        // Segment angles are measured with 0 degrees under the pointer, so
        // shift by a quarter turn to screen coordinates before rotating.
        for segment in data.segments.segments() {
            let start = (segment.min_deg - 90.0).to_radians() + rotation;
            let sweep = (segment.max_deg - segment.min_deg).to_radians();
            let slice = CircleSegment::new(center, radius, 0.0, start, sweep);
            ctx.fill(slice, &segment.label.fill());
        }

        ctx.stroke(Circle::new(center, radius), &RIM_COLOR, RIM_WIDTH);

        // The pointer does not rotate with the wheel.
        let pointer = Rect::from_center_size(
            Point::new(center.x, center.y - radius),
            POINTER_SIZE,
        );
        ctx.fill(pointer, &Color::BLACK);
        ctx.stroke(pointer, &Color::WHITE, 2.0);
    }
}
