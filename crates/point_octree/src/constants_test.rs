use super::*;

// =========================================================================
// Octant Layout Tests
// =========================================================================

/// Capacity must stay at 8 for the split/merge thresholds to line up.
#[test]
fn test_max_entries_is_8() {
  assert_eq!(MAX_ENTRIES, 8, "Leaves split on the 9th entry");
}

/// Every octant offset is a unique corner of the unit cube.
#[test]
fn test_octant_offsets_are_unique_corners() {
  for (i, a) in OCTANT_OFFSETS.iter().enumerate() {
    assert_eq!(a.abs(), Vec3::ONE, "Octant {} must sit on a corner", i);
    for (j, b) in OCTANT_OFFSETS.iter().enumerate().skip(i + 1) {
      assert_ne!(a, b, "Octants {} and {} overlap", i, j);
    }
  }
}

/// Offsets agree with the bit layout: bit 0 = +x, bit 1 = +z, bit 2 = -y.
#[test]
fn test_octant_offsets_match_index_bits() {
  for (i, offset) in OCTANT_OFFSETS.iter().enumerate() {
    let expect_x = if i & 1 == 0 { -1.0 } else { 1.0 };
    let expect_z = if i & 2 == 0 { -1.0 } else { 1.0 };
    let expect_y = if i & 4 == 0 { 1.0 } else { -1.0 };

    assert_eq!(offset.x, expect_x, "Octant {} x sign", i);
    assert_eq!(offset.y, expect_y, "Octant {} y sign", i);
    assert_eq!(offset.z, expect_z, "Octant {} z sign", i);
  }
}
