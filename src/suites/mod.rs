// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Built-in test providers, one module per math type

pub mod mat3;
pub mod mat4;
pub mod point_cloud;
pub mod quat;
pub mod vec;
pub mod vec2;
pub mod vec3;
pub mod vec4;

use crate::harness::ProviderRegistry;

/// Register every built-in provider under its configuration name
pub fn register_all(registry: &mut ProviderRegistry) {
    registry.register_default::<vec2::TestCase>("vec2");
    registry.register_default::<vec3::TestCase>("vec3");
    registry.register_default::<vec4::TestCase>("vec4");
    registry.register_default::<mat3::TestCase>("mat3");
    registry.register_default::<mat4::TestCase>("mat4");
    registry.register_default::<quat::TestCase>("quat");
    registry.register_default::<point_cloud::TestCase>("point_cloud");
    registry.register_default::<vec::TestCase>("vec");
}
