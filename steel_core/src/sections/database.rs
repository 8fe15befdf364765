//! Section Property Database (AISC)
//!
//! Lookup from a shape label to its [`SectionGeometry`], in metric units.
//!
//! ## Data Source
//!
//! Shape properties come from the AISC Shapes Database v15.0/v16.0 exported
//! to CSV. Every property column appears twice in that file: first in US
//! customary units, then in metric units under the same header. The loader
//! reads the metric occurrence and applies the AISC metric scaling:
//!
//! | Property        | CSV unit       | Stored as |
//! |-----------------|----------------|-----------|
//! | Ix, Iy          | 10⁶ mm⁴        | mm⁴       |
//! | Sx, Sy, Zx, Zy  | 10³ mm³        | mm³       |
//! | J               | 10³ mm⁴        | mm⁴       |
//! | Cw              | 10⁹ mm⁶        | mm⁶       |
//!
//! Shapes are indexed by both their imperial ("W6X15") and metric
//! ("W150X22.5") labels; matching is case-insensitive.
//!
//! ## Example
//!
//! ```rust,ignore
//! use steel_core::sections::SectionDb;
//!
//! let db = SectionDb::load_from_csv("aisc-shapes-database-v16.0.csv")?;
//! let w14x90 = db.lookup("W14X90")?;
//! let same = db.lookup("W360X134")?;
//!
//! println!("{}", w14x90);
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::{SectionGeometry, SectionType};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;
use crate::units::{Millimeters, Mm3, Mm4, Mm6, SqMm};

const INERTIA_SCALE: f64 = 1e6;
const SECTION_MODULUS_SCALE: f64 = 1e3;
const TORSIONAL_CONSTANT_SCALE: f64 = 1e3;
const WARPING_CONSTANT_SCALE: f64 = 1e9;

/// Section geometry records indexed by label
#[derive(Debug, Clone, Default)]
pub struct SectionDb {
    shapes: Vec<SectionGeometry>,

    /// Uppercase imperial and metric labels → position in `shapes`
    index: HashMap<String, usize>,

    by_type: HashMap<SectionType, Vec<usize>>,

    /// Database version (e.g. "16.0")
    pub version: Option<String>,
}

impl SectionDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Load shapes from an AISC shapes database CSV file
    pub fn load_from_csv(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = std::fs::File::open(path)
            .map_err(|e| CalcError::file_error("open", &source, format!("Failed to open CSV: {}", e)))?;
        Self::from_reader(file, &source)
    }

    /// Load shapes from any CSV source; `source` only labels errors
    pub fn from_reader<R: Read>(reader: R, source: &str) -> CalcResult<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| CalcError::file_error("read", source, format!("Failed to read header: {}", e)))?
            .clone();
        let columns = Columns::new(&headers);

        let type_idx = columns
            .first("Type")
            .ok_or_else(|| CalcError::file_error("parse", source, "Missing 'Type' column"))?;
        let label_idx = columns
            .first("AISC_Manual_Label")
            .ok_or_else(|| CalcError::file_error("parse", source, "Missing 'AISC_Manual_Label' column"))?;
        let metric_label_idx = columns.last("AISC_Manual_Label").filter(|&i| i != label_idx);

        let mut db = SectionDb::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                CalcError::file_error("read", source, format!("Failed to read line {}: {}", row + 2, e))
            })?;

            let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::trim);
            let label = match field(Some(label_idx)) {
                Some(label) if !label.is_empty() => label.to_string(),
                _ => continue,
            };
            let section_type = match field(Some(type_idx)).and_then(SectionType::from_aisc_code) {
                Some(SectionType::HssRect) if field(columns.metric("OD")).and_then(parse_optional_f64).is_some() => {
                    SectionType::HssRound
                }
                Some(t) => t,
                None => continue,
            };

            let opt = |name: &str| field(columns.metric(name)).and_then(parse_optional_f64);
            let length = |name: &str| opt(name).map(Millimeters);

            db.insert(SectionGeometry {
                section_type,
                label,
                metric_label: field(metric_label_idx).filter(|s| !s.is_empty()).map(str::to_string),
                weight: opt("W"),
                area: opt("A").map(SqMm),
                d: length("d"),
                bf: length("bf"),
                tw: length("tw"),
                tf: length("tf"),
                bf_2tf: opt("bf/2tf"),
                h_tw: opt("h/tw"),
                ix: opt("Ix").map(|v| Mm4(v * INERTIA_SCALE)),
                zx: opt("Zx").map(|v| Mm3(v * SECTION_MODULUS_SCALE)),
                sx: opt("Sx").map(|v| Mm3(v * SECTION_MODULUS_SCALE)),
                rx: length("rx"),
                iy: opt("Iy").map(|v| Mm4(v * INERTIA_SCALE)),
                zy: opt("Zy").map(|v| Mm3(v * SECTION_MODULUS_SCALE)),
                sy: opt("Sy").map(|v| Mm3(v * SECTION_MODULUS_SCALE)),
                ry: length("ry"),
                j: opt("J").map(|v| Mm4(v * TORSIONAL_CONSTANT_SCALE)),
                cw: opt("Cw").map(|v| Mm6(v * WARPING_CONSTANT_SCALE)),
                rts: length("rts"),
                ho: length("ho"),
            });
        }

        Ok(db)
    }

    /// Insert a shape, indexed by its imperial and metric labels
    pub fn insert(&mut self, shape: SectionGeometry) {
        let position = self.shapes.len();
        self.index.insert(shape.label.to_uppercase(), position);
        if let Some(metric) = &shape.metric_label {
            self.index.insert(metric.to_uppercase(), position);
        }
        self.by_type.entry(shape.section_type).or_default().push(position);
        self.shapes.push(shape);
    }

    /// Look up a shape by imperial or metric label (case-insensitive)
    pub fn lookup(&self, label: &str) -> CalcResult<&SectionGeometry> {
        self.index
            .get(&label.trim().to_uppercase())
            .and_then(|&i| self.shapes.get(i))
            .ok_or_else(|| CalcError::section_not_found(label))
    }

    /// Get all shapes of a specific type, in file order
    pub fn shapes_of_type(&self, section_type: SectionType) -> Vec<&SectionGeometry> {
        self.by_type
            .get(&section_type)
            .map(|positions| positions.iter().filter_map(|&i| self.shapes.get(i)).collect())
            .unwrap_or_default()
    }

    /// Shapes whose imperial or metric label starts with `prefix`
    pub fn search(&self, prefix: &str) -> Vec<&SectionGeometry> {
        let prefix = prefix.to_uppercase();
        self.shapes
            .iter()
            .filter(|s| {
                s.label.to_uppercase().starts_with(&prefix)
                    || s.metric_label
                        .as_ref()
                        .is_some_and(|m| m.to_uppercase().starts_with(&prefix))
            })
            .collect()
    }

    /// All shapes, in insertion order
    pub fn shapes(&self) -> &[SectionGeometry] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Header positions. Repeated headers keep every position so the metric
/// (last) occurrence can be selected.
struct Columns {
    positions: HashMap<String, Vec<usize>>,
}

impl Columns {
    fn new(headers: &csv::StringRecord) -> Self {
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            positions.entry(header.trim().to_string()).or_default().push(i);
        }
        Columns { positions }
    }

    fn first(&self, name: &str) -> Option<usize> {
        self.positions.get(name).and_then(|p| p.first().copied())
    }

    fn last(&self, name: &str) -> Option<usize> {
        self.positions.get(name).and_then(|p| p.last().copied())
    }

    /// Metric column of a property
    fn metric(&self, name: &str) -> Option<usize> {
        self.last(name)
    }
}

/// Parse an optional f64 from a CSV field
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "–" || trimmed == "—" {
        return None;
    }
    f64::from_str(trimmed).ok()
}

// ============================================================================
// Built-in Shapes (for use without the CSV file)
// ============================================================================

static BUILTIN_SHAPES: Lazy<SectionDb> = Lazy::new(build_builtin_shapes);

/// Common W-shapes with the metric properties of the AISC database.
///
/// Built once per process on first use.
pub fn builtin_shapes() -> &'static SectionDb {
    &BUILTIN_SHAPES
}

fn build_builtin_shapes() -> SectionDb {
    let mut db = SectionDb::new();

    // (label, metric label, kg/m, A mm², d, bf, tw, tf mm, bf/2tf, h/tw,
    //  Ix 10⁶mm⁴, Zx 10³mm³, Sx 10³mm³, rx mm, Iy 10⁶mm⁴, Zy 10³mm³, Sy 10³mm³, ry mm,
    //  J 10³mm⁴, Cw 10⁹mm⁶, ho mm)
    let common_w_shapes = [
        ("W6X15", "W150X22.5", 22.5, 2860.0, 152.0, 152.0, 5.84, 6.60, 11.5, 21.6,
         12.1, 177.0, 159.0, 65.0, 3.88, 77.8, 51.0, 36.8, 42.0, 20.5, 146.0),
        ("W12X26", "W310X38.7", 38.7, 4940.0, 310.0, 165.0, 5.84, 9.65, 8.54, 47.2,
         85.1, 622.0, 549.0, 131.0, 7.20, 134.0, 87.5, 38.4, 125.0, 163.0, 300.0),
        ("W14X90", "W360X134", 134.0, 17100.0, 356.0, 369.0, 11.2, 18.0, 10.2, 25.9,
         416.0, 2570.0, 2340.0, 156.0, 151.0, 1220.0, 817.0, 94.0, 1710.0, 4300.0, 338.0),
        ("W44X335", "W1100X499", 499.0, 63500.0, 1120.0, 404.0, 26.2, 45.0, 4.50, 38.0,
         12900.0, 26500.0, 23100.0, 452.0, 499.0, 3870.0, 2460.0, 88.6, 31100.0, 144000.0, 1070.0),
    ];

    for (label, metric, w, a, d, bf, tw, tf, bf_2tf, h_tw, ix, zx, sx, rx, iy, zy, sy, ry, j, cw, ho) in
        common_w_shapes
    {
        let ix = Mm4(ix * INERTIA_SCALE);
        let iy = Mm4(iy * INERTIA_SCALE);
        let sx = Mm3(sx * SECTION_MODULUS_SCALE);
        let cw = Mm6(cw * WARPING_CONSTANT_SCALE);
        db.insert(SectionGeometry {
            section_type: SectionType::W,
            label: label.to_string(),
            metric_label: Some(metric.to_string()),
            weight: Some(w),
            area: Some(SqMm(a)),
            d: Some(Millimeters(d)),
            bf: Some(Millimeters(bf)),
            tw: Some(Millimeters(tw)),
            tf: Some(Millimeters(tf)),
            bf_2tf: Some(bf_2tf),
            h_tw: Some(h_tw),
            ix: Some(ix),
            zx: Some(Mm3(zx * SECTION_MODULUS_SCALE)),
            sx: Some(sx),
            rx: Some(Millimeters(rx)),
            iy: Some(iy),
            zy: Some(Mm3(zy * SECTION_MODULUS_SCALE)),
            sy: Some(Mm3(sy * SECTION_MODULUS_SCALE)),
            ry: Some(Millimeters(ry)),
            j: Some(Mm4(j * TORSIONAL_CONSTANT_SCALE)),
            cw: Some(cw),
            rts: Some(Millimeters(((iy.0 * cw.0).sqrt() / sx.0).sqrt())),
            ho: Some(Millimeters(ho)),
        });
    }

    db.version = Some("builtin-metric".to_string());
    db
}

/// Section database selected by the settings: the configured CSV file, or
/// the built-in table when none is set.
pub fn load_database(settings: &DesignSettings) -> CalcResult<SectionDb> {
    match &settings.shapes_csv_path {
        Some(path) => SectionDb::load_from_csv(path),
        None => Ok(builtin_shapes().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Two rows in the AISC layout: imperial block, then metric block with
    /// repeated headers.
    const SAMPLE_CSV: &str = "\
Type,EDI_Std_Nomenclature,AISC_Manual_Label,T_F,W,A,d,bf,tw,tf,bf/2tf,h/tw,Ix,Zx,Sx,rx,Iy,Zy,Sy,ry,J,Cw,rts,ho,OD,EDI_Std_Nomenclature,AISC_Manual_Label,W,A,d,bf,tw,tf,bf/2tf,h/tw,Ix,Zx,Sx,rx,Iy,Zy,Sy,ry,J,Cw,rts,ho,OD
W,W6X15,W6X15,F,15,4.43,5.99,5.99,0.23,0.26,11.5,21.6,29.1,10.8,9.72,2.56,9.32,4.75,3.11,1.45,0.101,76.5,1.66,5.73,–,W150X22.5,W150X22.5,22.5,2860,152,152,5.84,6.60,11.5,21.6,12.1,177,159,65.0,3.88,77.8,51.0,36.8,42.0,20.5,42.2,146,–
HSS,HSS4.000X0.250,HSS4.000X0.250,F,10,2.76,–,–,–,–,–,–,4.59,3.12,2.30,1.29,4.59,3.12,2.30,1.29,9.17,–,–,–,4.00,HSS101.6X6.4,HSS101.6X6.4,14.9,1780,–,–,–,–,–,–,1.91,51.1,37.7,32.8,1.91,51.1,37.7,32.8,3820,–,–,–,102
";

    #[test]
    fn test_csv_uses_metric_columns() {
        let db = SectionDb::from_reader(SAMPLE_CSV.as_bytes(), "sample").unwrap();
        assert_eq!(db.len(), 2);

        let w6 = db.lookup("W6X15").unwrap();
        assert_eq!(w6.section_type, SectionType::W);
        assert_eq!(w6.metric_label.as_deref(), Some("W150X22.5"));
        assert_relative_eq!(w6.area.unwrap().0, 2860.0);
        assert_relative_eq!(w6.ix.unwrap().0, 12.1e6, max_relative = 1e-12);
        assert_relative_eq!(w6.zx.unwrap().0, 177e3, max_relative = 1e-12);
        assert_relative_eq!(w6.j.unwrap().0, 42.0e3, max_relative = 1e-12);
        assert_relative_eq!(w6.cw.unwrap().0, 20.5e9, max_relative = 1e-12);
        assert_eq!(w6.ho, Some(Millimeters(146.0)));
        assert_eq!(w6.bf_2tf, Some(11.5));
    }

    #[test]
    fn test_csv_missing_values_and_hss_refinement() {
        let db = SectionDb::from_reader(SAMPLE_CSV.as_bytes(), "sample").unwrap();
        let hss = db.lookup("HSS101.6X6.4").unwrap();
        assert_eq!(hss.section_type, SectionType::HssRound);
        assert_eq!(hss.d, None);
        assert_eq!(hss.cw, None);
        assert_eq!(db.shapes_of_type(SectionType::HssRound).len(), 1);
    }

    #[test]
    fn test_csv_blank_property_fails_section() {
        use crate::materials::Material;
        use crate::sections::{ConstructionType, Section};
        use crate::units::MegaPascals;

        // W6X15 with the metric ry cell blank
        let csv = SAMPLE_CSV.replacen(",65.0,3.88,77.8,51.0,36.8,", ",65.0,3.88,77.8,51.0,–,", 1);
        let db = SectionDb::from_reader(csv.as_bytes(), "sample").unwrap();
        let w6 = db.lookup("W6X15").unwrap();
        assert_eq!(w6.ry, None);

        let material = Material::steel(MegaPascals(355.0), MegaPascals(500.0));
        let err = Section::new(w6, material, ConstructionType::Rolled, None).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err, CalcError::missing_field("ry"));
    }

    #[test]
    fn test_csv_missing_required_column() {
        let err = SectionDb::from_reader("Label,A\nW6X15,2860\n".as_bytes(), "bad").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SectionDb::load_from_csv("does/not/exist.csv").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_builtin_shapes() {
        let db = builtin_shapes();
        assert_eq!(db.len(), 4);
        let w6 = db.lookup("w6x15").unwrap();
        assert_eq!(w6.label, "W6X15");
        assert_eq!(db.lookup("W150X22.5").unwrap().label, "W6X15");
        assert_relative_eq!(w6.sx.unwrap().0, 159e3, max_relative = 1e-12);
        assert!(w6.rts.unwrap().0 > 0.0);
    }

    #[test]
    fn test_shape_not_found() {
        let err = builtin_shapes().lookup("W99X999").unwrap_err();
        assert_eq!(err, CalcError::section_not_found("W99X999"));
    }

    #[test]
    fn test_search_and_filter() {
        let db = builtin_shapes();
        // W150X22.5 and W1100X499 match through their metric labels
        assert_eq!(db.search("W1").len(), 4);
        let w14 = db.search("w14");
        assert_eq!(w14.len(), 1);
        assert_eq!(w14[0].label, "W14X90");
        assert_eq!(db.search("W1100")[0].label, "W44X335");
        assert_eq!(db.shapes_of_type(SectionType::W).len(), 4);
        assert!(db.shapes_of_type(SectionType::C).is_empty());
    }

    #[test]
    fn test_parse_optional_f64() {
        assert_eq!(parse_optional_f64("123.45"), Some(123.45));
        assert_eq!(parse_optional_f64("  456  "), Some(456.0));
        assert_eq!(parse_optional_f64(""), None);
        assert_eq!(parse_optional_f64("-"), None);
        assert_eq!(parse_optional_f64("–"), None);
        assert_eq!(parse_optional_f64("not a number"), None);
    }

    #[test]
    fn test_load_database_defaults_to_builtin() {
        let db = load_database(&DesignSettings::default()).unwrap();
        assert_eq!(db.version.as_deref(), Some("builtin-metric"));
        assert!(db.lookup("W44X335").is_ok());
    }
}
