pub mod balloons;
pub mod result_card;
pub mod section;
pub mod spec_inputs;
