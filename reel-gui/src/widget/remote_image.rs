use std::sync::Arc;

use druid::{
    widget::{prelude::*, FillStrat, Image},
    Data, ImageBuf, Point, Selector, WidgetPod,
};

/// Asks the app delegate to load the image at the given relative location.
pub const REQUEST_DATA: Selector<Arc<str>> = Selector::new("remote-image.request-data");
/// Delivered back to the requesting widget once the image is decoded.
pub const PROVIDE_DATA: Selector<ImagePayload> = Selector::new("remote-image.provide-data");

#[derive(Clone)]
pub struct ImagePayload {
    pub location: Arc<str>,
    pub image_buf: ImageBuf,
}

type Locator<T> = Box<dyn Fn(&T, &Env) -> Option<Arc<str>>>;

/// Shows `placeholder` until the image found by `locator` arrives.  A `None` location
/// keeps the placeholder forever.
pub struct RemoteImage<T> {
    placeholder: WidgetPod<T, Box<dyn Widget<T>>>,
    image: Option<WidgetPod<T, Image>>,
    locator: Locator<T>,
    location: Option<Arc<str>>,
}

impl<T: Data> RemoteImage<T> {
    pub fn new(
        placeholder: impl Widget<T> + 'static,
        locator: impl Fn(&T, &Env) -> Option<Arc<str>> + 'static,
    ) -> Self {
        Self {
            placeholder: WidgetPod::new(placeholder).boxed(),
            image: None,
            locator: Box::new(locator),
            location: None,
        }
    }

    /// Re-resolve the location; returns the one to request, if it changed.
    fn relocate(&mut self, data: &T, env: &Env) -> Option<Option<Arc<str>>> {
        let location = (self.locator)(data, env);
        if location == self.location {
            return None;
        }
        self.image = None;
        self.location = location.clone();
        Some(location)
    }
}

impl<T: Data> Widget<T> for RemoteImage<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(payload) = cmd.get(PROVIDE_DATA) {
                if self.location.as_ref() == Some(&payload.location) {
                    let image = Image::new(payload.image_buf.clone()).fill_mode(FillStrat::Cover);
                    self.image = Some(WidgetPod::new(image));
                    ctx.children_changed();
                }
                ctx.set_handled();
                return;
            }
        }
        match self.image.as_mut() {
            Some(image) => image.event(ctx, event, data, env),
            None => self.placeholder.event(ctx, event, data, env),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if let Some(Some(location)) = self.relocate(data, env) {
                ctx.submit_command(REQUEST_DATA.with(location).to(ctx.widget_id()));
            }
        }
        match self.image.as_mut() {
            Some(image) => image.lifecycle(ctx, event, data, env),
            None => self.placeholder.lifecycle(ctx, event, data, env),
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        if let Some(location) = self.relocate(data, env) {
            if let Some(location) = location {
                ctx.submit_command(REQUEST_DATA.with(location).to(ctx.widget_id()));
            }
            ctx.children_changed();
        }
        match self.image.as_mut() {
            Some(image) => image.update(ctx, data, env),
            None => self.placeholder.update(ctx, data, env),
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        match self.image.as_mut() {
            Some(image) => {
                let size = image.layout(ctx, bc, data, env);
                image.set_origin(ctx, Point::ORIGIN);
                size
            }
            None => {
                let size = self.placeholder.layout(ctx, bc, data, env);
                self.placeholder.set_origin(ctx, Point::ORIGIN);
                size
            }
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        match self.image.as_mut() {
            Some(image) => image.paint(ctx, data, env),
            None => self.placeholder.paint(ctx, data, env),
        }
    }
}
