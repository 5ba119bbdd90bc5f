// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod processor_core;
mod example_loop;
mod example_params;
mod example_processor;
mod example_service;
pub mod factory;

pub use processor_core::ProcessorCore;
pub use example_params::ExampleParams;
pub use example_processor::ExampleProcessor;
pub use example_service::ExampleService;
pub use factory::LocalProcessorFactory;
