//! Column layout of range files
//!
//! A range file starts with a header row naming its columns. The six
//! required columns may appear in any order and in any letter case; extra
//! columns are allowed and ignored.

/// Required columns of a range file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Column {
    /// Name of the taxon
    Taxon,
    /// Range type token (`points` or `range`)
    Type,
    /// Age of the range map
    Age,
    /// Number of pixels at the equator of the pixelation
    Equator,
    /// Pixel id
    Pixel,
    /// Density at the pixel
    Density,
}

impl Column {
    /// All required columns, in the order they are written
    pub const ALL: [Column; 6] = [
        Column::Taxon,
        Column::Type,
        Column::Age,
        Column::Equator,
        Column::Pixel,
        Column::Density,
    ];

    /// Header name of the column
    pub const fn name(&self) -> &'static str {
        match self {
            Column::Taxon => "taxon",
            Column::Type => "type",
            Column::Age => "age",
            Column::Equator => "equator",
            Column::Pixel => "pixel",
            Column::Density => "density",
        }
    }

    /// Match a header field, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [usize; 6],
    width: usize,
}

impl ColumnMap {
    /// Build the map from the fields of a header row
    ///
    /// Returns the first missing column as the error value.
    pub fn from_header<'a, I>(fields: I) -> Result<Self, Column>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = [None; 6];
        let mut width = 0;
        for (i, field) in fields.into_iter().enumerate() {
            if let Some(col) = Column::from_name(field) {
                found[col.index()] = Some(i);
            }
            width = i + 1;
        }

        let mut positions = [0; 6];
        for col in Column::ALL {
            positions[col.index()] = found[col.index()].ok_or(col)?;
        }
        Ok(Self { positions, width })
    }

    /// Field position of a column
    pub const fn position(&self, col: Column) -> usize {
        self.positions[col.index()]
    }

    /// Number of fields in the header row
    pub const fn width(&self) -> usize {
        self.width
    }
}
