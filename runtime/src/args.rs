//! Positional kernel argument capture.
//!
//! Arguments are recorded as an ordered list of typed values and bound to
//! consecutive kernel slots in a single pass by the accelerator task's
//! `bind_parameters`. Each variant's payload has exactly the byte size the
//! compiled kernel expects in that slot; matching variant to slot type is
//! the call site's job, not checked here.

/// One argument value captured for later positional binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgValue {
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    /// A device buffer handle.
    #[cfg(feature = "opencl")]
    Mem(opencl3::types::cl_mem),
}

impl ArgValue {
    /// Byte size handed to the argument slot.
    pub fn size(&self) -> usize {
        match self {
            ArgValue::Int(_) | ArgValue::UInt(_) | ArgValue::Float(_) => 4,
            ArgValue::Long(_) | ArgValue::ULong(_) | ArgValue::Double(_) => 8,
            #[cfg(feature = "opencl")]
            ArgValue::Mem(_) => size_of::<opencl3::types::cl_mem>(),
        }
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::UInt(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Long(value)
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        ArgValue::ULong(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Double(value)
    }
}

/// Ordered argument list bound to consecutive kernel slots starting at 0.
#[derive(Debug, Clone, Default)]
pub struct KernelArgs {
    values: Vec<ArgValue>,
}

impl KernelArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next positional argument.
    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn push(&mut self, value: impl Into<ArgValue>) {
        self.values.push(value.into());
    }

    pub fn values(&self) -> &[ArgValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
