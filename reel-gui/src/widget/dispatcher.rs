use std::{collections::HashMap, hash::Hash};

use druid::{widget::prelude::*, Data, Point, WidgetPod};

type Screen<T> = WidgetPod<T, Box<dyn Widget<T>>>;

/// Shows one screen per route key, building each lazily on first visit and keeping it
/// afterwards, so going back to a screen finds its scroll offsets and posters intact.
pub struct ViewDispatcher<T, K> {
    route: Box<dyn Fn(&T, &Env) -> K>,
    build: Box<dyn Fn(&K, &T, &Env) -> Box<dyn Widget<T>>>,
    screens: HashMap<K, Screen<T>>,
    current: Option<K>,
}

impl<T: Data, K: Data + Eq + Hash> ViewDispatcher<T, K> {
    pub fn new(
        route: impl Fn(&T, &Env) -> K + 'static,
        build: impl Fn(&K, &T, &Env) -> Box<dyn Widget<T>> + 'static,
    ) -> Self {
        Self {
            route: Box::new(route),
            build: Box::new(build),
            screens: HashMap::new(),
            current: None,
        }
    }

    /// Switch to the screen for the current route.  Returns the key if that screen was
    /// built just now and has not seen `WidgetAdded` yet.
    fn follow_route(&mut self, data: &T, env: &Env) -> Option<K> {
        let key = (self.route)(data, env);
        if self.current.as_ref() == Some(&key) {
            return None;
        }
        let built = if self.screens.contains_key(&key) {
            None
        } else {
            let screen = (self.build)(&key, data, env);
            self.screens.insert(key.clone(), WidgetPod::new(screen));
            Some(key.clone())
        };
        self.current = Some(key);
        built
    }

    fn screen(&mut self) -> Option<&mut Screen<T>> {
        self.screens.get_mut(self.current.as_ref()?)
    }
}

impl<T: Data, K: Data + Eq + Hash> Widget<T> for ViewDispatcher<T, K> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if event.should_propagate_to_hidden() {
            self.screens
                .values_mut()
                .for_each(|screen| screen.event(ctx, event, data, env));
        } else if let Some(screen) = self.screen() {
            screen.event(ctx, event, data, env);
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            self.follow_route(data, env);
            ctx.children_changed();
        }
        if event.should_propagate_to_hidden() {
            self.screens
                .values_mut()
                .for_each(|screen| screen.lifecycle(ctx, event, data, env));
        } else if let Some(screen) = self.screen() {
            screen.lifecycle(ctx, event, data, env);
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        let before = self.current.clone();
        let built = self.follow_route(data, env);
        if self.current != before {
            ctx.children_changed();
            ctx.request_layout();
        }
        for (key, screen) in self.screens.iter_mut() {
            if built.as_ref() != Some(key) {
                screen.update(ctx, data, env);
            }
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let Some(screen) = self.screen() else {
            return bc.max();
        };
        let size = screen.layout(ctx, bc, data, env);
        screen.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        if let Some(screen) = self.screen() {
            screen.paint_raw(ctx, data, env);
        }
    }
}
