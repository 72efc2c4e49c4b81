pub mod order_status;
pub mod ride_status;

pub use order_status::OrderStatus;
pub use ride_status::RideStatus;
