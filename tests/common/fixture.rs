use std::{io::{self, Write}, env, fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::{self, TempDir};

pub const TEST_DATA_DIR: &str = "./tests/test-data";

/// A test-data file (or directory), relocated within its own temporary directory.
/// The temporary directory is deleted once the fixture is dropped.
pub struct Fixture {
    path: PathBuf,
    source: PathBuf,
    _tempdir: TempDir,
}

impl Fixture {
    /// Reserve a path named after `fixture_filename`, without creating anything.
    pub fn blank(fixture_filename: &str) -> Self {
        let root_dir = &env::var("CARGO_MANIFEST_DIR").expect("$CARGO_MANIFEST_DIR");
        let source = [root_dir.as_str(), TEST_DATA_DIR, fixture_filename].iter().collect::<PathBuf>();

        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let path = match Path::new(fixture_filename).file_name() {
            Some(name) => tempdir.path().join(name),
            None       => tempdir.path().join(fixture_filename),
        };

        Fixture { _tempdir: tempdir, source, path }
    }

    /// Copy a file or directory from `tests/test-data`
    pub fn copy(fixture_filename: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        if fixture.source.is_dir() {
            copy_dir_all(&fixture.source, &fixture.path).expect("Failed to copy directory");
        } else {
            fs::copy(&fixture.source, &fixture.path).expect("Failed to copy Fixture files.");
        }
        fixture
    }

    /// Gzip-compress a file from `tests/test-data`, and write it under `filename`
    pub fn gzip(fixture_filename: &str, filename: &str) -> Self {
        let mut fixture = Fixture::blank(fixture_filename);
        fixture.path.set_file_name(filename);

        let contents = fs::read(&fixture.source).expect("Failed to read Fixture file");
        let file = fs::File::create(&fixture.path).expect("Failed to create compressed Fixture");
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(&contents).expect("Failed to compress Fixture");
        encoder.finish().expect("Failed to flush compressed Fixture");
        fixture
    }
}

fn copy_dir_all(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(&dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        if ty.is_dir() {
            copy_dir_all(entry.path(), dst.as_ref().join(entry.file_name()))?;
        } else {
            fs::copy(entry.path(), dst.as_ref().join(entry.file_name()))?;
        }
    }
    Ok(())
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.to_str().expect("Invalid path (non UTF8 characters ?)"))
    }
}
