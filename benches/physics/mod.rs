pub mod fallingsand;
