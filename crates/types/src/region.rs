//! Screen rectangle hit-testing for pointer clicks

use std::fmt;
use std::str::FromStr;

/// A point in root window pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl ClickRegion {
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// `x_min <= x <= x_max && y_min <= y <= y_max`
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}

impl Default for ClickRegion {
    fn default() -> Self {
        Self::new(2960, 3630, 0, 20)
    }
}

impl fmt::Display for ClickRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// Parse "X_MIN,X_MAX,Y_MIN,Y_MAX"
impl FromStr for ClickRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(format!(
                "Expected format: X_MIN,X_MAX,Y_MIN,Y_MAX (e.g., 2960,3630,0,20), got: {}",
                s
            ));
        }
        let mut bounds = [0i32; 4];
        for (slot, part) in bounds.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid coordinate '{}': {}", part.trim(), e))?;
        }
        let [x_min, x_max, y_min, y_max] = bounds;
        if x_min > x_max || y_min > y_max {
            return Err(format!("Region is empty: {}", s));
        }
        Ok(Self::new(x_min, x_max, y_min, y_max))
    }
}
