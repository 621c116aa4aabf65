// src/columns.rs
//
// The fixed column groups of the Planetary Systems (`ps`) table and the
// flag-driven drop set built from them. Names not present in a given
// response are ignored at filter time, so these lists may safely name
// columns the archive later renames or removes.

use std::collections::BTreeSet;

/// Suffixes marking uncertainty, limit-flag, formatted-string and
/// bibliographic-reference columns. The archive pairs most measured
/// parameters with `<col>err1`/`<col>err2` bounds, a `<col>lim` flag, a
/// `<col>str` display form and a `<col>reflink` citation.
pub static ERROR_SUFFIXES: &[&str] = &["err1", "err2", "lim", "str", "reflink"];

/// Housekeeping columns that never carry science values: solution flags,
/// reference-name strings and publication/update dates. Always dropped.
static HOUSEKEEPING_COLUMNS: &[&str] = &[
    "default_flag",
    "pl_controv_flag",
    "ttv_flag",
    "soltype",
    "pl_refname",
    "st_refname",
    "sy_refname",
    "pl_pubdate",
    "rowupdate",
    "releasedate",
];

/// Cross-identifiers into other catalogs (HD, Hipparcos, TESS, Gaia).
static CATALOG_NAME_COLUMNS: &[&str] = &["hd_name", "hip_name", "tic_id", "gaia_id"];

/// Astrometric and system-level columns: position, distance, parallax,
/// proper motion.
static SYSTEM_COLUMNS: &[&str] = &[
    "ra", "dec", "glat", "glon", "sy_dist", "sy_plx", "sy_pm", "sy_pmra", "sy_pmdec",
];

/// System photometry across the archive's reported bands.
static PHOTOMETRY_COLUMNS: &[&str] = &[
    "sy_umag",
    "sy_bmag",
    "sy_vmag",
    "sy_gmag",
    "sy_rmag",
    "sy_imag",
    "sy_zmag",
    "sy_jmag",
    "sy_hmag",
    "sy_kmag",
    "sy_w1mag",
    "sy_w2mag",
    "sy_w3mag",
    "sy_w4mag",
    "sy_gaiamag",
    "sy_icmag",
    "sy_tmag",
];

/// Column groups to retain in a confirmed-planets export. Every flag
/// defaults to false: the narrowest export, planet parameters only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnFlags {
    /// Keep cross-identifier columns (HD/HIP/TIC/Gaia names).
    pub include_catalog_name: bool,
    /// Keep uncertainty, limit, string and reflink columns (suffix-matched).
    pub include_errors: bool,
    /// Keep astrometric/system columns.
    pub include_system: bool,
    /// Keep photometric magnitude columns.
    pub include_photometry: bool,
}

/// The materialised drop decision for one export: an exact-name set plus
/// whether suffix-matched error columns go too.
#[derive(Debug, Clone)]
pub struct DropSet {
    names: BTreeSet<String>,
    drop_error_suffixes: bool,
}

impl DropSet {
    /// True when `column` should be removed from the export.
    pub fn matches(&self, column: &str) -> bool {
        if self.names.contains(column) {
            return true;
        }
        self.drop_error_suffixes && ERROR_SUFFIXES.iter().any(|s| column.ends_with(s))
    }
}

/// Build the drop set for a confirmed-planets export.
///
/// Group lists come in two variants: when `include_errors` is set, the
/// suffix rule no longer removes the `err1`/`err2` siblings of a dropped
/// group, so each group expands to the superset naming those siblings
/// explicitly. They must leave with their base column.
pub fn drop_set(flags: &ColumnFlags) -> DropSet {
    let mut names: BTreeSet<String> = HOUSEKEEPING_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .collect();

    if !flags.include_catalog_name {
        names.extend(CATALOG_NAME_COLUMNS.iter().map(|s| s.to_string()));
    }
    if !flags.include_system {
        names.extend(group_columns(SYSTEM_COLUMNS, flags.include_errors));
    }
    if !flags.include_photometry {
        names.extend(group_columns(PHOTOMETRY_COLUMNS, flags.include_errors));
    }

    DropSet {
        names,
        drop_error_suffixes: !flags.include_errors,
    }
}

fn group_columns(base: &'static [&'static str], with_errors: bool) -> Vec<String> {
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if with_errors {
        for col in base {
            out.push(format!("{col}err1"));
            out.push(format!("{col}err2"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn housekeeping_always_dropped() {
        let all_on = ColumnFlags {
            include_catalog_name: true,
            include_errors: true,
            include_system: true,
            include_photometry: true,
        };
        let drops = drop_set(&all_on);
        assert!(drops.matches("default_flag"));
        assert!(drops.matches("rowupdate"));
        assert!(drops.matches("pl_refname"));
        // science columns survive when every group is included
        assert!(!drops.matches("pl_orbper"));
        assert!(!drops.matches("sy_dist"));
        assert!(!drops.matches("sy_vmag"));
        assert!(!drops.matches("gaia_id"));
    }

    #[test]
    fn error_suffixes_gated_on_include_errors() {
        let drops = drop_set(&ColumnFlags::default());
        assert!(drops.matches("pl_orbpererr1"));
        assert!(drops.matches("pl_orbpererr2"));
        assert!(drops.matches("pl_orbperlim"));
        assert!(drops.matches("pl_orbperstr"));
        assert!(drops.matches("pl_orbper_reflink"));

        let drops = drop_set(&ColumnFlags {
            include_errors: true,
            ..Default::default()
        });
        assert!(!drops.matches("pl_orbpererr1"));
        assert!(!drops.matches("pl_orbperlim"));
        assert!(!drops.matches("pl_orbperstr"));
    }

    #[test]
    fn system_err_siblings_follow_their_group() {
        // errors kept overall, system dropped: sy_disterr1 must still go
        let drops = drop_set(&ColumnFlags {
            include_errors: true,
            ..Default::default()
        });
        assert!(drops.matches("sy_dist"));
        assert!(drops.matches("sy_disterr1"));
        assert!(drops.matches("sy_disterr2"));
        assert!(drops.matches("sy_vmagerr1"));
        // a non-system error column survives
        assert!(!drops.matches("pl_radeerr1"));
    }

    #[test]
    fn include_system_keeps_astrometry() {
        let drops = drop_set(&ColumnFlags {
            include_system: true,
            ..Default::default()
        });
        assert!(!drops.matches("sy_dist"));
        assert!(!drops.matches("ra"));
        // but its error columns still fall to the suffix rule
        assert!(drops.matches("sy_disterr1"));
    }
}
