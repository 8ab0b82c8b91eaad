// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::{
    BufferKey, BufferSnapshot, BufferStatus, Consumer, DebounceConfig, DebounceError, Manager,
    ManagerBuilder,
};
