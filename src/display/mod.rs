//! Status destinations

mod stdout;
mod x11;

pub use stdout::StdoutPublisher;
pub use x11::RootWindow;
