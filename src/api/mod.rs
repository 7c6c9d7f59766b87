// API surface of the prototyping server.

pub mod pages;
