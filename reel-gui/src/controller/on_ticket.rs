use druid::{
    widget::{prelude::*, Controller},
    Data, Selector,
};

/// Sends `selector` with the ticket derived from the data to the wrapped widget, once
/// when it is added and again every time the ticket changes.
pub struct OnTicket<T, U> {
    selector: Selector<U>,
    ticket: Box<dyn Fn(&T) -> U>,
}

impl<T, U> OnTicket<T, U> {
    pub fn new(selector: Selector<U>, ticket: impl Fn(&T) -> U + 'static) -> Self {
        Self {
            selector,
            ticket: Box::new(ticket),
        }
    }
}

impl<T, U, W> Controller<T, W> for OnTicket<T, U>
where
    T: Data,
    U: PartialEq + 'static,
    W: Widget<T>,
{
    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &T,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            let ticket = (self.ticket)(data);
            ctx.submit_command(self.selector.with(ticket).to(ctx.widget_id()));
        }
        child.lifecycle(ctx, event, data, env)
    }

    fn update(&mut self, child: &mut W, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        let ticket = (self.ticket)(data);
        if (self.ticket)(old_data) != ticket {
            ctx.submit_command(self.selector.with(ticket).to(ctx.widget_id()));
        }
        child.update(ctx, old_data, data, env)
    }
}
