//! Structured coordinate values for image-map areas.

use std::fmt;

/// Comma-joined coordinate list for `<area coords>`.
///
/// An empty list elides the attribute, matching the rule that an empty value
/// never writes anything.
///
/// # Examples
///
/// ```
/// use grappelli_attrs::Coords;
///
/// assert_eq!(Coords::rect(0, 0, 80, 24).to_string(), "0,0,80,24");
/// assert_eq!(Coords::circle(50, 50, 10).to_string(), "50,50,10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coords(Vec<i32>);

impl Coords {
	/// Builds from an explicit coordinate list.
	pub fn new(points: impl Into<Vec<i32>>) -> Self {
		Self(points.into())
	}

	/// Rectangle corners: left, top, right, bottom.
	pub fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Self {
		Self(vec![left, top, right, bottom])
	}

	/// Circle center and radius.
	pub fn circle(x: i32, y: i32, radius: i32) -> Self {
		Self(vec![x, y, radius])
	}

	/// Polygon vertices as (x, y) pairs.
	pub fn poly(points: impl IntoIterator<Item = (i32, i32)>) -> Self {
		Self(points.into_iter().flat_map(|(x, y)| [x, y]).collect())
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[i32] {
		&self.0
	}
}

impl From<Vec<i32>> for Coords {
	fn from(points: Vec<i32>) -> Self {
		Self(points)
	}
}

impl From<&[i32]> for Coords {
	fn from(points: &[i32]) -> Self {
		Self(points.to_vec())
	}
}

impl<const N: usize> From<[i32; N]> for Coords {
	fn from(points: [i32; N]) -> Self {
		Self(points.to_vec())
	}
}

impl fmt::Display for Coords {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for point in &self.0 {
			if !first {
				f.write_str(",")?;
			}
			write!(f, "{point}")?;
			first = false;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_joins_with_commas() {
		assert_eq!(Coords::new(vec![1, 2, 3]).to_string(), "1,2,3");
		assert_eq!(Coords::from([0, -4, 7]).to_string(), "0,-4,7");
	}

	#[test]
	fn poly_flattens_pairs() {
		let coords = Coords::poly([(0, 0), (10, 0), (5, 8)]);
		assert_eq!(coords.as_slice(), &[0, 0, 10, 0, 5, 8]);
		assert_eq!(coords.to_string(), "0,0,10,0,5,8");
	}

	#[test]
	fn empty_list_renders_nothing() {
		let coords = Coords::default();
		assert!(coords.is_empty());
		assert_eq!(coords.to_string(), "");
	}
}
