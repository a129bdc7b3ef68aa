pub mod daisy_css;
pub mod owned_css;
pub mod postprocess;
