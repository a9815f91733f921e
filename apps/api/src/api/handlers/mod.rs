// HTTP handlers (controllers)

pub mod games;
