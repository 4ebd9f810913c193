//! Dimension identifiers and their member tables.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reports::ReportError;

/// One of the twelve orthogonal tagging axes (cost center, project, department, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Dimension 1.
    R1,
    /// Dimension 2.
    R2,
    /// Dimension 3.
    R3,
    /// Dimension 4.
    R4,
    /// Dimension 5.
    R5,
    /// Dimension 6.
    R6,
    /// Dimension 7.
    R7,
    /// Dimension 8.
    R8,
    /// Dimension 9.
    R9,
    /// Dimension 10.
    R10,
    /// Dimension 11.
    R11,
    /// Dimension 12.
    R12,
}

impl Dimension {
    /// All dimensions in order.
    pub const ALL: [Self; 12] = [
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
        Self::R8,
        Self::R9,
        Self::R10,
        Self::R11,
        Self::R12,
    ];

    /// Returns the 1-based dimension number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::R1 => 1,
            Self::R2 => 2,
            Self::R3 => 3,
            Self::R4 => 4,
            Self::R5 => 5,
            Self::R6 => 6,
            Self::R7 => 7,
            Self::R8 => 8,
            Self::R9 => 9,
            Self::R10 => 10,
            Self::R11 => 11,
            Self::R12 => 12,
        }
    }

    /// Looks up a dimension by its 1-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.number() == number)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}", self.number())
    }
}

impl FromStr for Dimension {
    type Err = ReportError;

    /// Accepts `R1`..`R12` (any case) or a bare number `1`..`12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('R')
            .or_else(|| trimmed.strip_prefix('r'))
            .unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| ReportError::InvalidParameter {
                parameter: "dimension",
                value: s.to_string(),
                expected: "R1..R12",
            })
    }
}

/// Uniform accessor over members of any dimension table.
pub trait DimensionMember {
    /// Dimension the member belongs to.
    fn dimension(&self) -> Dimension;
    /// Key used in ledger tags.
    fn key(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Longer description, if any.
    fn description(&self) -> Option<&str>;
    /// Key of the parent member in a hierarchy, if any.
    fn parent_key(&self) -> Option<&str>;
}

/// A member of a dimension table as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionValue {
    /// Dimension the value belongs to.
    pub dimension: Dimension,
    /// Key used in ledger tags.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
}

impl DimensionMember for DimensionValue {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn parent_key(&self) -> Option<&str> {
        self.parent_key.as_deref()
    }
}

/// Members of one dimension indexed by key.
#[derive(Debug, Clone)]
pub struct DimensionTable<M: DimensionMember = DimensionValue> {
    dimension: Dimension,
    members: BTreeMap<String, M>,
}

impl<M: DimensionMember> DimensionTable<M> {
    /// Creates an empty table for a dimension.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            members: BTreeMap::new(),
        }
    }

    /// Builds a table, ignoring members that belong to another dimension.
    #[must_use]
    pub fn from_members(dimension: Dimension, members: impl IntoIterator<Item = M>) -> Self {
        let mut table = Self::new(dimension);
        for member in members {
            table.insert(member);
        }
        table
    }

    /// Inserts a member; returns false if it belongs to another dimension.
    pub fn insert(&mut self, member: M) -> bool {
        if member.dimension() != self.dimension {
            return false;
        }
        self.members.insert(member.key().to_string(), member);
        true
    }

    /// Looks up a member by key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&M> {
        self.members.get(key)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the table has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
