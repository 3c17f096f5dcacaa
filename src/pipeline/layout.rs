//! File layout shared by the pipeline steps.
//!
//! The downstream tools find each other's outputs purely by name, so every
//! path goes through [`Layout`] and is derived from the same [`RunConfig`].

use super::params::RunConfig;
use crate::constants::fit::{MH_LABEL, SEED};
use std::fmt;

/// A directory plus file name, possibly containing `*`/`?` wildcards in the
/// file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    dir: Option<String>,
    file_name: String,
}

impl PathTemplate {
    /// Create a template inside `dir`.
    pub fn new(dir: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            dir: Some(dir.into()),
            file_name: file_name.into(),
        }
    }

    /// Create a template for a bare file name in the working directory.
    pub fn bare(file_name: impl Into<String>) -> Self {
        Self {
            dir: None,
            file_name: file_name.into(),
        }
    }

    /// Directory component, if any.
    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    /// File name component.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether the file name contains wildcards.
    pub fn is_pattern(&self) -> bool {
        self.file_name.contains(['*', '?'])
    }
}

impl fmt::Display for PathTemplate {
    // Always `/`: these strings are arguments for the tools, not host paths.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dir {
            Some(dir) => write!(f, "{dir}/{}", self.file_name),
            None => f.write_str(&self.file_name),
        }
    }
}

/// Path builder for one run.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    run: &'a RunConfig,
}

impl<'a> Layout<'a> {
    /// Create the layout for a run.
    pub const fn new(run: &'a RunConfig) -> Self {
        Self { run }
    }

    fn hists_dir(&self) -> String {
        format!("hists/merged_{}", self.run.hists_date)
    }

    fn datacard_dir(&self) -> String {
        format!("dc_{}_{}", self.run.dc_date, self.run.sel)
    }

    fn toys_dir(&self) -> String {
        format!("toys_{}", self.run.dc_date)
    }

    fn scans_dir(&self) -> String {
        format!("scans_{}", self.run.scan_date)
    }

    /// Stem shared by a signal sample's histogram file and its datacard.
    pub fn signal_stem(&self, mass: u32) -> String {
        format!(
            "SVJ_s-channel_mMed-{mass}_mDark-{}_rinv-{}_alpha-peak_MADPT300_13TeV-madgraphMLM-pythia8_sel-{}",
            self.run.m_dark, self.run.rinv, self.run.sel
        )
    }

    /// Background histogram JSON.
    pub fn background_hists(&self) -> PathTemplate {
        PathTemplate::new(self.hists_dir(), format!("bkg_sel-{}.json", self.run.sel))
    }

    /// Signal histogram JSON for one mediator mass.
    pub fn signal_hists(&self, mass: u32) -> PathTemplate {
        PathTemplate::new(self.hists_dir(), format!("{}.json", self.signal_stem(mass)))
    }

    /// Datacard the generator writes for one mediator mass.
    pub fn datacard(&self, mass: u32) -> PathTemplate {
        PathTemplate::new(
            self.datacard_dir(),
            format!("dc_{}.txt", self.signal_stem(mass)),
        )
    }

    /// Every datacard of this dark mass, invisible fraction and selection.
    pub fn datacard_pattern(&self) -> PathTemplate {
        PathTemplate::new(
            self.datacard_dir(),
            format!(
                "dc_*mDark-{}_rinv-{}*sel-{}*.txt",
                self.run.m_dark, self.run.rinv, self.run.sel
            ),
        )
    }

    /// Signal-injected toy produced from the injected-mass datacard.
    pub fn injected_toy(&self) -> PathTemplate {
        PathTemplate::new(
            self.toys_dir(),
            format!(
                "higgsCombineObserved_dc_{}.GenerateOnly.{MH_LABEL}.{SEED}.root",
                self.signal_stem(self.run.m_inj)
            ),
        )
    }

    /// Every scan result of this dark mass and invisible fraction.
    pub fn scan_pattern(&self) -> PathTemplate {
        PathTemplate::new(
            self.scans_dir(),
            format!(
                "higgsCombine*mDark-{}_rinv-{}*.root",
                self.run.m_dark, self.run.rinv
            ),
        )
    }

    /// Brazil plot output.
    pub fn plot(&self) -> PathTemplate {
        PathTemplate::bare(format!(
            "brazil_siginj_mMed-{}_rinv-{}_mDark-{}.pdf",
            self.run.m_inj, self.run.rinv, self.run.m_dark
        ))
    }
}
