//! Projection of a graph partition back onto the instances.

use crate::error::{ConsensusError, Result};

/// Extracts the child labels from a partition assignment.
///
/// The first `instance_count` entries are returned verbatim; cluster-vertex
/// entries are discarded. Labels are not renumbered, so the child's label
/// space is exactly `0..nparts` as chosen by the partitioner.
///
/// Fails with [`ConsensusError::ContractViolation`] if the assignment does
/// not have `vertex_count` entries or holds a part id `>= nparts`.
pub fn decode(
    assignment: &[usize],
    vertex_count: usize,
    instance_count: usize,
    nparts: usize,
) -> Result<Vec<usize>> {
    if assignment.len() != vertex_count {
        return Err(ConsensusError::ContractViolation(format!(
            "assignment has {} entries, graph has {vertex_count} vertices",
            assignment.len()
        )));
    }
    if let Some((vertex, &part)) = assignment.iter().enumerate().find(|(_, &p)| p >= nparts) {
        return Err(ConsensusError::ContractViolation(format!(
            "vertex {vertex} assigned to part {part}, expected < {nparts}"
        )));
    }
    Ok(assignment[..instance_count].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_instance_prefix() {
        let labels = decode(&[1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0], 11, 7, 2).unwrap();
        assert_eq!(labels, vec![1, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_wrong_length() {
        let err = decode(&[0, 1, 0], 4, 2, 2).unwrap_err();
        assert!(matches!(err, ConsensusError::ContractViolation(_)));
    }

    #[test]
    fn test_out_of_range_part() {
        // Cluster-vertex entries are still checked.
        let err = decode(&[0, 1, 0, 2], 4, 2, 2).unwrap_err();
        assert!(matches!(err, ConsensusError::ContractViolation(_)));
    }
}
