mod dispatcher;
mod link;
pub mod remote_image;

use std::sync::Arc;

use druid::{widget::ControllerHost, Data, EventCtx, Selector, Widget};

pub use dispatcher::ViewDispatcher;
pub use link::Link;
pub use remote_image::RemoteImage;

use crate::controller::{OnCommandAsync, OnTicket};

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }

    fn on_command_async<U: Send + Clone + 'static, V: Send + 'static>(
        self,
        selector: Selector<U>,
        request: impl Fn(U) -> V + Sync + Send + 'static,
        preflight: impl Fn(&mut EventCtx, &mut T, U) + 'static,
        response: impl Fn(&mut EventCtx, &mut T, (U, V)) + 'static,
    ) -> OnCommandAsync<Self, T, U, V> {
        OnCommandAsync::new(
            self,
            selector,
            Box::new(preflight),
            Arc::new(request),
            Box::new(response),
        )
    }

    /// Issue `selector` to this widget whenever the ticket computed from the data
    /// changes, including once when the widget is first added.
    fn on_ticket<U: PartialEq + 'static>(
        self,
        selector: Selector<U>,
        ticket: impl Fn(&T) -> U + 'static,
    ) -> ControllerHost<Self, OnTicket<T, U>> {
        ControllerHost::new(self, OnTicket::new(selector, ticket))
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
