use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug)]
pub enum ParseShapeError {
    WrongTokenCount { expected: usize, found: usize },
    BadNumber { token: String },
}

impl Display for ParseShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseShapeError::WrongTokenCount { expected, found } => write!(f, "Expected {} numbers, found {}", expected, found),
            ParseShapeError::BadNumber { token } => write!(f, "Not a number: {:?}", token),
        }
    }
}

impl std::error::Error for ParseShapeError {}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rhombus described by its center and two adjacent vertices.
///
/// The adjacent vertices are endpoints of the two diagonals, so the distances
/// center-to-vertex are the half-diagonals and the area is half the product
/// of the full diagonals.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rhombus {
    pub center: Point,
    pub first: Point,
    pub second: Point,
}

impl Rhombus {
    pub fn new(center: Point, first: Point, second: Point) -> Rhombus {
        Rhombus { center, first, second }
    }

    pub fn area(&self) -> f64 {
        let half_first = self.center.distance(&self.first);
        let half_second = self.center.distance(&self.second);
        2.0 * half_first * half_second
    }
}

/// Parses six whitespace-separated numbers: center, then the two vertices.
impl FromStr for Rhombus {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Rhombus, ParseShapeError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 6 {
            return Err(ParseShapeError::WrongTokenCount { expected: 6, found: tokens.len() });
        }
        let mut numbers = [0f64; 6];
        for (slot, token) in numbers.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| ParseShapeError::BadNumber { token: (*token).to_string() })?;
        }
        Ok(Rhombus::new(
            Point::new(numbers[0], numbers[1]),
            Point::new(numbers[2], numbers[3]),
            Point::new(numbers[4], numbers[5]),
        ))
    }
}

impl Display for Rhombus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rhombus with center {} and vertices {}, {}", self.center, self.first, self.second)
    }
}

#[cfg(test)]
mod rhombus_tests {
    use super::{ParseShapeError, Point, Rhombus};

    #[test]
    fn area_is_twice_the_half_diagonal_product() {
        let rhombus = Rhombus::new(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 1.0),
        );
        assert!((rhombus.area() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn area_is_translation_invariant() {
        let at_origin = Rhombus::new(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 2.0),
        );
        let shifted = Rhombus::new(
            Point::new(10.0, -5.0),
            Point::new(13.0, -5.0),
            Point::new(10.0, -3.0),
        );
        assert!((at_origin.area() - shifted.area()).abs() < 1e-12);
    }

    #[test]
    fn parses_six_numbers() {
        let rhombus: Rhombus = "0 0 2 0 0 1".parse().unwrap();
        assert_eq!(Point::new(0.0, 0.0), rhombus.center);
        assert_eq!(Point::new(2.0, 0.0), rhombus.first);
        assert_eq!(Point::new(0.0, 1.0), rhombus.second);
    }

    #[test]
    fn rejects_wrong_token_count() {
        let result = "1 2 3".parse::<Rhombus>();
        assert!(matches!(
            result,
            Err(ParseShapeError::WrongTokenCount { expected: 6, found: 3 })
        ));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let result = "0 0 two 0 0 1".parse::<Rhombus>();
        match result {
            Err(ParseShapeError::BadNumber { token }) => assert_eq!("two", token),
            other => panic!("expected BadNumber, got {:?}", other),
        }
    }

    #[test]
    fn displays_center_and_vertices() {
        let rhombus: Rhombus = "0 0 2 0 0 1".parse().unwrap();
        assert_eq!(
            "Rhombus with center (0, 0) and vertices (2, 0), (0, 1)",
            format!("{}", rhombus),
        );
    }
}
