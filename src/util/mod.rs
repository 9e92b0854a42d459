pub mod invocations;
