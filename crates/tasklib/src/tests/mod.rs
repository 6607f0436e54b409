//! Behavioural tests for the task dispatch contract.

mod behaviour;
