/// ParameterBinding - a named, typed, range-constrained value cell.
///
/// A binding is a cheap-to-clone handle: the control surface and the
/// example holding it observe the same cell. Every write is coerced to the
/// binding's kind (clamped and quantized for scalars) and the coerced value
/// is what every reader sees from then on.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use crate::engine_bail;
use crate::error::Result;
use crate::scene::Color;

const MAX_DECIMALS: i32 = 12;
const MAX_COLOR: u32 = 0xFF_FFFF;

/// Value domain of a binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterKind {
    /// Number in `[min, max]`, snapped to `min + k * step` (step 0 = continuous)
    Scalar { min: f64, max: f64, step: f64 },
    /// Packed 0xRRGGBB color
    Color,
    Boolean,
}

/// A value stored in (or written to) a binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Scalar(f64),
    Color(u32),
    Boolean(bool),
}

impl ParameterValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ParameterValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<u32> {
        match self {
            ParameterValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParameterValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            ParameterValue::Scalar(_) => "scalar",
            ParameterValue::Color(_) => "color",
            ParameterValue::Boolean(_) => "boolean",
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Scalar(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Scalar(v) => write!(f, "{}", v),
            ParameterValue::Color(v) => write!(f, "#{:06x}", v),
            ParameterValue::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl ParameterKind {
    fn name(&self) -> &'static str {
        match self {
            ParameterKind::Scalar { .. } => "scalar",
            ParameterKind::Color => "color",
            ParameterKind::Boolean => "boolean",
        }
    }
}

/// Number of decimals in the shortest representation of `value`
fn decimals(value: f64) -> i32 {
    let text = format!("{}", value);
    match text.split_once('.') {
        Some((_, fraction)) => (fraction.len() as i32).min(MAX_DECIMALS),
        None => 0,
    }
}

/// Clamp to `[min, max]`, then snap to the step grid anchored at `min`
fn quantize(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }

    let factor = 10f64.powi(decimals(step).max(decimals(min)));
    let round = |v: f64| (v * factor).round() / factor;

    let mut snapped = round(min + ((clamped - min) / step).round() * step);
    if snapped > max {
        snapped = round(snapped - step);
    }
    snapped.clamp(min, max)
}

#[derive(Debug)]
struct BindingCell {
    name: String,
    kind: ParameterKind,
    value: Mutex<ParameterValue>,
}

/// Shared handle to a binding cell
#[derive(Debug, Clone)]
pub struct ParameterBinding {
    cell: Arc<BindingCell>,
}

impl ParameterBinding {
    fn create(name: &str, kind: ParameterKind, initial: ParameterValue) -> Result<Self> {
        if name.is_empty() {
            engine_bail!("galaxy3d::ParameterBinding", InvalidParameter,
                "Binding name must not be empty");
        }
        let initial = coerce(name, kind, initial)?;
        Ok(Self {
            cell: Arc::new(BindingCell {
                name: name.to_string(),
                kind,
                value: Mutex::new(initial),
            }),
        })
    }

    /// Declare a scalar binding
    ///
    /// # Arguments
    ///
    /// * `name` - Unique name within the owning example
    /// * `initial` - Initial value, coerced like any write
    /// * `min`, `max` - Closed range (finite, `min <= max`)
    /// * `step` - Quantization step (finite, `>= 0`, 0 = continuous, at
    ///   most `max - min` for a non-empty range)
    ///
    /// Stored values lie on `min + k * step`, so `max` itself is only
    /// reachable when `step` divides `max - min`.
    pub fn scalar(name: &str, initial: f64, min: f64, max: f64, step: f64) -> Result<ScalarBinding> {
        if !min.is_finite() || !max.is_finite() || min > max {
            engine_bail!("galaxy3d::ParameterBinding", InvalidParameter,
                "Binding '{}' has invalid range [{}, {}]", name, min, max);
        }
        if !step.is_finite() || step < 0.0 {
            engine_bail!("galaxy3d::ParameterBinding", InvalidParameter,
                "Binding '{}' has invalid step {}", name, step);
        }
        if min < max && step > max - min {
            engine_bail!("galaxy3d::ParameterBinding", InvalidParameter,
                "Binding '{}' step {} exceeds range [{}, {}]", name, step, min, max);
        }
        let kind = ParameterKind::Scalar { min, max, step };
        Self::create(name, kind, ParameterValue::Scalar(initial)).map(ScalarBinding)
    }

    /// Declare a color binding (0xRRGGBB)
    pub fn color(name: &str, initial: u32) -> Result<ColorBinding> {
        Self::create(name, ParameterKind::Color, ParameterValue::Color(initial)).map(ColorBinding)
    }

    /// Declare a boolean binding
    pub fn boolean(name: &str, initial: bool) -> Result<BoolBinding> {
        Self::create(name, ParameterKind::Boolean, ParameterValue::Boolean(initial)).map(BoolBinding)
    }

    pub fn name(&self) -> &str {
        &self.cell.name
    }

    pub fn kind(&self) -> ParameterKind {
        self.cell.kind
    }

    /// Last stored value
    pub fn read(&self) -> ParameterValue {
        *self.cell.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Coerce and store a value, returning what was stored
    pub fn write(&self, value: impl Into<ParameterValue>) -> Result<ParameterValue> {
        let coerced = coerce(&self.cell.name, self.cell.kind, value.into())?;
        *self.cell.value.lock().unwrap_or_else(PoisonError::into_inner) = coerced;
        Ok(coerced)
    }

    /// Whether two handles observe the same cell
    pub fn ptr_eq(&self, other: &ParameterBinding) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

fn coerce(name: &str, kind: ParameterKind, value: ParameterValue) -> Result<ParameterValue> {
    match (kind, value) {
        (ParameterKind::Scalar { min, max, step }, ParameterValue::Scalar(v)) => {
            if v.is_nan() {
                engine_bail!("galaxy3d::ParameterBinding", InvalidParameter,
                    "Binding '{}' cannot store NaN", name);
            }
            Ok(ParameterValue::Scalar(quantize(v, min, max, step)))
        }
        (ParameterKind::Color, ParameterValue::Color(v)) => Ok(ParameterValue::Color(v.min(MAX_COLOR))),
        (ParameterKind::Boolean, ParameterValue::Boolean(v)) => Ok(ParameterValue::Boolean(v)),
        (kind, value) => {
            engine_bail!("galaxy3d::ParameterBinding", InvalidParameter,
                "Binding '{}' is a {} binding, cannot store a {} value",
                name, kind.name(), value.kind_name());
        }
    }
}

// ===== TYPED HANDLES =====

/// Scalar view of a binding
#[derive(Debug, Clone)]
pub struct ScalarBinding(ParameterBinding);

impl ScalarBinding {
    pub fn get(&self) -> f64 {
        self.0.read().as_scalar().unwrap_or_default()
    }

    pub fn set(&self, value: f64) -> Result<f64> {
        self.0.write(value).map(|stored| stored.as_scalar().unwrap_or_default())
    }

    /// `(min, max, step)`
    pub fn range(&self) -> (f64, f64, f64) {
        match self.0.kind() {
            ParameterKind::Scalar { min, max, step } => (min, max, step),
            _ => (0.0, 0.0, 0.0),
        }
    }

    pub fn binding(&self) -> &ParameterBinding {
        &self.0
    }
}

/// Color view of a binding
#[derive(Debug, Clone)]
pub struct ColorBinding(ParameterBinding);

impl ColorBinding {
    /// Packed 0xRRGGBB value
    pub fn hex(&self) -> u32 {
        self.0.read().as_color().unwrap_or_default()
    }

    /// A fresh `Color` built from the stored value
    pub fn get(&self) -> Color {
        Color::from_hex(self.hex())
    }

    pub fn set(&self, hex: u32) -> Result<u32> {
        self.0
            .write(ParameterValue::Color(hex))
            .map(|stored| stored.as_color().unwrap_or_default())
    }

    pub fn binding(&self) -> &ParameterBinding {
        &self.0
    }
}

/// Boolean view of a binding
#[derive(Debug, Clone)]
pub struct BoolBinding(ParameterBinding);

impl BoolBinding {
    pub fn get(&self) -> bool {
        self.0.read().as_bool().unwrap_or_default()
    }

    pub fn set(&self, value: bool) -> Result<bool> {
        self.0.write(value).map(|stored| stored.as_bool().unwrap_or_default())
    }

    pub fn binding(&self) -> &ParameterBinding {
        &self.0
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
