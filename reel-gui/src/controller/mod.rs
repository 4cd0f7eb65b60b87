mod nav;
mod on_command_async;
mod on_ticket;

pub use nav::NavController;
pub use on_command_async::OnCommandAsync;
pub use on_ticket::OnTicket;
