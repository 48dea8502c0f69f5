pub mod cadence;
pub mod forecast;
pub mod team;
pub mod throughput;
pub mod work_item;
