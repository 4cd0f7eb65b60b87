use druid::{widget::prelude::*, Data, KeyOrValue, Point, RoundedRectRadii, WidgetPod};

use crate::ui::theme;

/// Paints a highlight behind its child while the pointer hovers over it.
pub struct Link<T> {
    inner: WidgetPod<T, Box<dyn Widget<T>>>,
    corner_radius: KeyOrValue<RoundedRectRadii>,
}

impl<T: Data> Link<T> {
    pub fn new(inner: impl Widget<T> + 'static) -> Self {
        Self {
            inner: WidgetPod::new(inner).boxed(),
            corner_radius: RoundedRectRadii::from(0.0).into(),
        }
    }

    pub fn rounded(mut self, radius: impl Into<KeyOrValue<RoundedRectRadii>>) -> Self {
        self.corner_radius = radius.into();
        self
    }
}

impl<T: Data> Widget<T> for Link<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.inner.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::HotChanged(_) = event {
            ctx.request_paint();
        }
        self.inner.lifecycle(ctx, event, data, env)
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.inner.layout(ctx, bc, data, env);
        self.inner.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let background = if ctx.is_hot() {
            env.get(theme::LINK_HOT_COLOR)
        } else {
            env.get(theme::LINK_COLD_COLOR)
        };
        let rounded_rect = ctx
            .size()
            .to_rect()
            .to_rounded_rect(self.corner_radius.resolve(env));
        ctx.fill(rounded_rect, &background);
        self.inner.paint(ctx, data, env);
    }
}
