// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point3;

/// Area of the triangle (p0, p1, p2): half the norm of the edge cross product.
/// Collinear points give exactly zero.
pub fn triangle_area(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    let side1 = p1 - p0;
    let side2 = p2 - p0;
    0.5 * side1.cross(&side2).norm()
}

/// Running sum with Neumaier compensation
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl std::iter::FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        for value in iter {
            sum.add(value);
        }
        sum
    }
}

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0001, 0.001));
        assert!(!approx_eq(1.0, 1.1, 0.001));
    }

    #[test]
    fn test_right_triangle_area() {
        let area = triangle_area(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(3.0, 0.0, 0.0),
            &Point3::new(0.0, 4.0, 0.0),
        );
        assert_eq!(area, 6.0);
    }

    #[test]
    fn test_collinear_triangle_area() {
        let area = triangle_area(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(area, 0.0);
    }

    #[test]
    fn test_compensated_sum_recovers_small_terms() {
        let mut sum = CompensatedSum::new();
        sum.add(1.0);
        for _ in 0..10_000 {
            sum.add(1e-16);
        }
        sum.add(-1.0);

        assert!(approx_eq(sum.value(), 1e-12, 1e-18));
    }

    #[test]
    fn test_compensated_sum_from_iter() {
        let sum: CompensatedSum = [0.1, 0.2, 0.3].into_iter().collect();
        assert!(approx_eq(sum.value(), 0.6, 1e-15));
    }
}
