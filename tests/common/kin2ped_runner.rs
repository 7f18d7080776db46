use std::path::{Path, PathBuf};

use clap::Parser;

use super::Fixture;

/// Builds a kin2ped command line out of test-data fixtures, and runs it through `kin2ped::run()`
#[derive(Default)]
pub struct Kin2PedRunnerBuilder {
    kin      : Option<Fixture>,
    fam      : Option<Fixture>,
    zip      : bool,
    plot     : bool,
    threshold: Vec<(&'static str, f64)>,
}

impl Kin2PedRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kin(mut self, fixture: &str) -> Self {
        self.kin = Some(Fixture::copy(fixture));
        self
    }

    /// Use an already prepared kinship file (e.g. a compressed copy of a fixture).
    pub fn set_kin_fixture(mut self, fixture: Fixture) -> Self {
        self.kin = Some(fixture);
        self
    }

    pub fn set_fam(mut self, fixture: &str) -> Self {
        self.fam = Some(Fixture::copy(fixture));
        self
    }

    pub fn zip(mut self) -> Self {
        self.zip = true;
        self
    }

    pub fn plot(mut self) -> Self {
        self.plot = true;
        self
    }

    pub fn set_threshold(mut self, flag: &'static str, value: f64) -> Self {
        self.threshold.push((flag, value));
        self
    }

    pub fn build(self) -> Result<Kin2PedRunner, &'static str> {
        let kin = self.kin.ok_or("Missing kinship file")?;
        let output_dir = Fixture::blank("kin2ped-test-output");
        Ok(Kin2PedRunner {
            out : output_dir.join("trios").join("cohort.trios"),
            plot: self.plot.then(|| output_dir.join("plots").join("cohort.svg")),
            kin,
            fam : self.fam,
            zip : self.zip,
            threshold: self.threshold,
            _output_dir: output_dir,
        })
    }
}

pub struct Kin2PedRunner {
    kin        : Fixture,
    fam        : Option<Fixture>,
    zip        : bool,
    threshold  : Vec<(&'static str, f64)>,
    out        : PathBuf,
    plot       : Option<PathBuf>,
    _output_dir: Fixture,
}

impl Kin2PedRunner {
    fn args(&self) -> Vec<String> {
        let mut args = vec!["kin2ped".to_string(), "--kin".to_string(), self.kin.to_string()];
        args.extend(["--out".to_string(), self.out.display().to_string()]);
        if let Some(fam) = &self.fam {
            args.extend(["--fam".to_string(), fam.to_string()]);
        }
        if let Some(plot) = &self.plot {
            args.extend(["--plot".to_string(), plot.display().to_string()]);
        }
        if self.zip {
            args.push("--zip".to_string());
        }
        for (flag, value) in &self.threshold {
            args.extend([format!("--{flag}"), value.to_string()]);
        }
        args
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let args = self.args();
        println!("{}", args.join(" "));
        let cli = parser::Cli::parse_from(args);
        kin2ped::run(cli)
    }

    pub fn output(&self) -> &Path {
        &self.out
    }

    pub fn output_plot(&self) -> Option<&Path> {
        self.plot.as_deref()
    }
}
