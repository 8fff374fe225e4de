use crate::layout::sheet_count;
use crate::validation::ValidatedParams;

/// Counts for a label run, known before anything is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStatistics {
    /// Labels in the range
    pub total_labels: u64,
    /// Grid cells per sheet
    pub labels_per_sheet: usize,
    /// Sheets needed
    pub sheets: u64,
    /// Labels on the final (possibly partial) sheet
    pub last_sheet_labels: usize,
}

impl LabelStatistics {
    /// Empty cells left on the final sheet
    pub fn unused_cells(&self) -> usize {
        self.labels_per_sheet - self.last_sheet_labels
    }
}

/// Calculate statistics for a label run
pub fn calculate_statistics(params: &ValidatedParams) -> LabelStatistics {
    let total_labels = params.range.len();
    let labels_per_sheet = params.grid.labels_per_sheet();
    let sheets = sheet_count(total_labels, labels_per_sheet);

    let remainder = (total_labels % labels_per_sheet as u64) as usize;
    let last_sheet_labels = if remainder == 0 {
        labels_per_sheet
    } else {
        remainder
    };

    LabelStatistics {
        total_labels,
        labels_per_sheet,
        sheets,
        last_sheet_labels,
    }
}
