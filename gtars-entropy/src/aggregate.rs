use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashMap;
use tracing::{debug, warn};

use crate::consts::{DELIMITER, FIELDS_PER_RECORD};
use crate::errors::{EntropyError, Result};
use crate::models::{EndLabel, LabelPolicy, LocusAggregate, LocusRecord};
use crate::utils::get_dynamic_reader_w_stdin;

///
/// Per-locus count sequences keyed by locus name.
///
/// Built once from the whole input, then handed read-only to the entropy step.
///
#[derive(Debug, Clone, Default)]
pub struct LocusTable {
    loci: FxHashMap<String, LocusAggregate>,
    folded_labels: usize,
}

impl LocusTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Fold one record into the table, creating the locus on first sight.
    ///
    pub fn add_record(&mut self, record: LocusRecord) {
        match self.loci.get_mut(&record.name) {
            Some(locus) => locus.push(record.end, record.count),
            None => {
                let mut locus = LocusAggregate::new(&record.name);
                locus.push(record.end, record.count);
                self.loci.insert(record.name, locus);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&LocusAggregate> {
        self.loci.get(name)
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    /// Number of records whose end label was neither `5p` nor `3p` and was counted as 3'.
    pub fn folded_labels(&self) -> usize {
        self.folded_labels
    }

    /// Iterate over loci in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &LocusAggregate> {
        self.loci.values()
    }

    ///
    /// Read every record from `reader` into a new table.
    ///
    /// # Arguments
    /// - reader: line oriented `name<TAB>end<TAB>count` input
    /// - policy: how end labels other than `5p`/`3p` are treated
    ///
    pub fn from_reader<R: BufRead>(reader: R, policy: LabelPolicy) -> Result<Self> {
        let mut table = LocusTable::new();
        let mut n_records: usize = 0;
        let mut first_folded: Option<String> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            let record = match parse_record(&line, line_no, policy)? {
                Some(record) => record,
                None => continue,
            };

            if policy == LabelPolicy::Permissive {
                let label = line.split(DELIMITER).nth(1).unwrap_or_default();
                if !EndLabel::is_canonical(label) {
                    table.folded_labels += 1;
                    if first_folded.is_none() {
                        first_folded = Some(label.to_string());
                    }
                }
            }

            table.add_record(record);
            n_records += 1;
        }

        if let Some(label) = first_folded {
            warn!(
                "{} record(s) had an end label other than 5p/3p (first: {:?}); counted as 3p",
                table.folded_labels, label
            );
        }
        debug!("Read {} records across {} loci", n_records, table.len());

        Ok(table)
    }

    ///
    /// Read a table from a file on disk (`.gz` is decompressed, `-` is stdin).
    ///
    pub fn from_path(path: &Path, policy: LabelPolicy) -> Result<Self> {
        let reader = get_dynamic_reader_w_stdin(path)?;
        LocusTable::from_reader(reader, policy)
    }
}

impl TryFrom<&Path> for LocusTable {
    type Error = EntropyError;

    ///
    /// Create a new [LocusTable] from a counts file, folding unknown end labels into 3'.
    ///
    /// # Arguments:
    /// - value: path to the counts file on disk.
    fn try_from(value: &Path) -> Result<Self> {
        LocusTable::from_path(value, LabelPolicy::Permissive)
    }
}

impl TryFrom<&str> for LocusTable {
    type Error = EntropyError;

    fn try_from(value: &str) -> Result<Self> {
        LocusTable::try_from(Path::new(value))
    }
}

impl FromIterator<LocusRecord> for LocusTable {
    fn from_iter<I: IntoIterator<Item = LocusRecord>>(iter: I) -> Self {
        let mut table = LocusTable::new();
        for record in iter {
            table.add_record(record);
        }
        table
    }
}

///
/// Parse a single input line into a [LocusRecord].
///
/// Blank lines yield `Ok(None)`.
///
/// # Arguments
/// - line: the raw line, with or without its line terminator
/// - line_no: 1-based line number, used in error messages
/// - policy: how end labels other than `5p`/`3p` are treated
///
pub fn parse_record(line: &str, line_no: usize, policy: LabelPolicy) -> Result<Option<LocusRecord>> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELDS_PER_RECORD {
        return Err(EntropyError::MalformedRecord {
            line: line_no,
            found: fields.len(),
        });
    }

    let (name, label, count) = (fields[0], fields[1], fields[2]);

    if name.is_empty() {
        return Err(EntropyError::EmptyLocusName { line: line_no });
    }

    let end = EndLabel::classify(label, policy).ok_or_else(|| EntropyError::UnknownEndLabel {
        line: line_no,
        label: label.to_string(),
    })?;

    let count = count
        .parse::<u64>()
        .map_err(|source| EntropyError::InvalidCount {
            line: line_no,
            value: count.to_string(),
            source,
        })?;

    Ok(Some(LocusRecord {
        name: name.to_string(),
        end,
        count,
    }))
}

///
/// Group all records from `reader` by locus name.
///
pub fn aggregate<R: BufRead>(reader: R, policy: LabelPolicy) -> Result<LocusTable> {
    LocusTable::from_reader(reader, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn mixed_input() -> &'static str {
        "L2\t3p\t7\nL1\t5p\t5\nL1\t3p\t10\nL1\t5p\t2\nL2\t5p\t0\n"
    }

    #[rstest]
    fn test_parse_record() {
        let record = parse_record("L1\t5p\t5\n", 1, LabelPolicy::Permissive)
            .unwrap()
            .unwrap();

        assert_eq!(
            record,
            LocusRecord {
                name: "L1".to_string(),
                end: EndLabel::FivePrime,
                count: 5,
            }
        );
    }

    #[rstest]
    fn test_parse_record_strips_crlf() {
        let record = parse_record("L1\t3p\t12\r\n", 1, LabelPolicy::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(record.count, 12);
        assert_eq!(record.end, EndLabel::ThreePrime);
    }

    #[rstest]
    #[case("")]
    #[case("\n")]
    fn test_parse_record_skips_blank_lines(#[case] line: &str) {
        assert!(parse_record(line, 1, LabelPolicy::Strict).unwrap().is_none());
    }

    #[rstest]
    #[case("L1\t5p", 2)]
    #[case("L1\t5p\t5\textra", 4)]
    #[case("L1 5p 5", 1)]
    fn test_parse_record_wrong_field_count(#[case] line: &str, #[case] found: usize) {
        match parse_record(line, 3, LabelPolicy::Permissive) {
            Err(EntropyError::MalformedRecord { line: 3, found: f }) => assert_eq!(f, found),
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[rstest]
    #[case("ten")]
    #[case("-1")]
    #[case("")]
    #[case("2.5")]
    fn test_parse_record_bad_count(#[case] count: &str) {
        let line = format!("L1\t5p\t{}", count);
        match parse_record(&line, 9, LabelPolicy::Permissive) {
            Err(EntropyError::InvalidCount { line: 9, value, .. }) => assert_eq!(value, count),
            other => panic!("Expected InvalidCount, got {:?}", other),
        }
    }

    #[rstest]
    fn test_parse_record_empty_name() {
        assert!(matches!(
            parse_record("\t5p\t1", 1, LabelPolicy::Permissive),
            Err(EntropyError::EmptyLocusName { line: 1 })
        ));
    }

    #[rstest]
    fn test_unknown_label_permissive_vs_strict() {
        let record = parse_record("L1\tmid\t4", 1, LabelPolicy::Permissive)
            .unwrap()
            .unwrap();
        assert_eq!(record.end, EndLabel::ThreePrime);

        match parse_record("L1\tmid\t4", 5, LabelPolicy::Strict) {
            Err(EntropyError::UnknownEndLabel { line: 5, label }) => assert_eq!(label, "mid"),
            other => panic!("Expected UnknownEndLabel, got {:?}", other),
        }
    }

    #[rstest]
    fn test_aggregate_groups_by_locus(mixed_input: &str) {
        let table = aggregate(Cursor::new(mixed_input), LabelPolicy::Permissive).unwrap();

        assert_eq!(table.len(), 2);

        let l1 = table.get("L1").unwrap();
        assert_eq!(l1.counts5p, vec![5, 2]);
        assert_eq!(l1.counts3p, vec![10]);

        let l2 = table.get("L2").unwrap();
        assert_eq!(l2.counts5p, vec![0]);
        assert_eq!(l2.counts3p, vec![7]);
    }

    #[rstest]
    fn test_every_record_lands_in_exactly_one_sequence(mixed_input: &str) {
        let table = aggregate(Cursor::new(mixed_input), LabelPolicy::Permissive).unwrap();
        let total: usize = table.iter().map(|locus| locus.len()).sum();
        assert_eq!(total, mixed_input.lines().count());
    }

    #[rstest]
    fn test_aggregate_reports_line_number() {
        let input = "L1\t5p\t5\n\nL1\t5p\tfive\n";
        match aggregate(Cursor::new(input), LabelPolicy::Permissive) {
            Err(EntropyError::InvalidCount { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected InvalidCount, got {:?}", other),
        }
    }

    #[rstest]
    fn test_hash_prefixed_locus_is_a_record() {
        let input = "#chr1:100\t5p\t3\n#chr1:100\t5p\t3\n";
        let table = aggregate(Cursor::new(input), LabelPolicy::Strict).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("#chr1:100").unwrap().counts5p, vec![3, 3]);

        let lines = crate::report::report(&crate::entropy::compute_all(&table));
        assert_eq!(lines[1], "#chr1:100\t0.6931471805599453\t0.0");
    }

    #[rstest]
    fn test_folded_labels_are_counted() {
        let input = "L1\t5p\t1\nL1\tmid\t2\nL1\t3p\t3\nL2\t3P\t4\n";
        let table = aggregate(Cursor::new(input), LabelPolicy::Permissive).unwrap();

        assert_eq!(table.folded_labels(), 2);
        assert_eq!(table.get("L1").unwrap().counts3p, vec![2, 3]);
        assert_eq!(table.get("L2").unwrap().counts3p, vec![4]);

        let canonical = aggregate(Cursor::new("L1\t5p\t1\nL1\t3p\t3\n"), LabelPolicy::Permissive)
            .unwrap();
        assert_eq!(canonical.folded_labels(), 0);
    }

    #[rstest]
    fn test_aggregate_empty_input() {
        let table = aggregate(Cursor::new(""), LabelPolicy::Permissive).unwrap();
        assert!(table.is_empty());
    }

    #[rstest]
    fn test_table_from_records() {
        let table: LocusTable = vec![
            LocusRecord {
                name: "A".to_string(),
                end: EndLabel::ThreePrime,
                count: 1,
            },
            LocusRecord {
                name: "A".to_string(),
                end: EndLabel::ThreePrime,
                count: 2,
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(table.get("A").unwrap().counts3p, vec![1, 2]);
        assert!(table.get("A").unwrap().counts5p.is_empty());
    }

    #[rstest]
    fn test_table_try_from_path(mixed_input: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entropy_input.tsv");
        std::fs::write(&path, mixed_input).unwrap();

        let table = LocusTable::try_from(path.as_path()).unwrap();
        assert_eq!(table.len(), 2);
    }
}
