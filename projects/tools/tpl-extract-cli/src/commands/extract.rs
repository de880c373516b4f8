use crate::error::CliError;
use crate::util::{
    canonicalize_cli_path, container_stem, existing_cli_path, find_all_files, mirrored_output_dir,
    Throughput,
};
use argh::FromArgs;
use bytesize::ByteSize;
use std::{
    collections::{hash_map::Entry, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};
use tpl_extract_api::{extract_images, raw_extents, with_file_contents, RgbaImage};
use tpl_extract_tpl::likely_tpl;
use tracing::{debug, info, warn};

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

#[derive(FromArgs, Debug)]
/// Extract every image of one TPL file, or of every TPL file under a directory, as PNG
#[argh(subcommand, name = "extract")]
pub struct ExtractCmd {
    /// input TPL file or directory
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// also write the undecoded texel bytes of each image
    #[argh(switch)]
    pub dump_raw: bool,
}

/// One container and where its images are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractJob {
    pub path: PathBuf,
    pub output_dir: PathBuf,
    pub stem: String,
}

/// Totals across all processed containers.
#[derive(Debug, Default)]
pub struct ExtractStats {
    pub containers: AtomicU64,
    pub containers_failed: AtomicU64,
    pub images_written: AtomicU64,
    pub images_failed: AtomicU64,
    pub bytes_processed: AtomicU64,
}

pub fn handle_extract_command(cmd: ExtractCmd) -> Result<(), Box<dyn std::error::Error>> {
    let containers = collect_containers(&cmd.input)?;
    if containers.is_empty() {
        println!("No TPL files found at {}", cmd.input.display());
        return Ok(());
    }

    println!("Found {} TPL files to extract", containers.len());

    let start = Instant::now();
    let stats = ExtractStats::default();

    let (jobs, collisions) = plan_jobs(containers, &cmd.input, &cmd.output);
    for collision in collisions {
        stats.containers_failed.fetch_add(1, Ordering::Relaxed);
        eprintln!("{collision}");
    }

    #[cfg(feature = "multithreaded")]
    let iter = jobs.par_iter();
    #[cfg(not(feature = "multithreaded"))]
    let iter = jobs.iter();

    iter.for_each(|job| {
        if let Err(e) = extract_container_file(job, cmd.dump_raw, &stats) {
            stats.containers_failed.fetch_add(1, Ordering::Relaxed);
            eprintln!("{}", e.in_file(&job.path));
        }
    });

    let elapsed = start.elapsed();
    let total_bytes = stats.bytes_processed.load(Ordering::Relaxed);

    println!("\n=== Extraction Complete ===");
    println!(
        "Containers: {} ({} failed)",
        stats.containers.load(Ordering::Relaxed),
        stats.containers_failed.load(Ordering::Relaxed)
    );
    println!("Images written: {}", stats.images_written.load(Ordering::Relaxed));
    println!("Images failed: {}", stats.images_failed.load(Ordering::Relaxed));
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(total_bytes));
    println!("Throughput: {}", Throughput::from_elapsed(total_bytes, elapsed));

    Ok(())
}

/// A single file is taken as-is; a directory contributes every file that looks like a TPL container.
pub fn collect_containers(input: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    find_all_files(input, &mut files)?;

    let mut containers = Vec::with_capacity(files.len());
    for file in files {
        match with_file_contents(&file, likely_tpl) {
            Ok(true) => containers.push(file),
            Ok(false) => debug!(path = %file.display(), "Skipping non-TPL file"),
            Err(e) => warn!(path = %file.display(), error = %e, "Could not read file"),
        }
    }

    containers.sort();
    Ok(containers)
}

/// Assigns every container an output directory mirroring its place under `input`.
///
/// Two containers in the same directory can still share a stem (`logo.tpl`, `logo.bin`);
/// the later one (in path order) is returned as a [`CliError::OutputCollision`] instead of
/// a job, so no output file is ever written twice.
pub fn plan_jobs(
    containers: Vec<PathBuf>,
    input: &Path,
    output: &Path,
) -> (Vec<ExtractJob>, Vec<CliError>) {
    let mut claimed: HashMap<(PathBuf, String), PathBuf> = HashMap::with_capacity(containers.len());
    let mut jobs = Vec::with_capacity(containers.len());
    let mut collisions = Vec::new();

    for path in containers {
        let output_dir = mirrored_output_dir(&path, input, output);
        let stem = container_stem(&path);

        match claimed.entry((output_dir.clone(), stem.clone())) {
            Entry::Occupied(first) => {
                let first = first.get().clone();
                collisions.push(CliError::OutputCollision { first }.in_file(path));
            }
            Entry::Vacant(slot) => {
                slot.insert(path.clone());
                jobs.push(ExtractJob {
                    path,
                    output_dir,
                    stem,
                });
            }
        }
    }

    (jobs, collisions)
}

/// Extracts one container file into its job's output directory.
pub fn extract_container_file(
    job: &ExtractJob,
    dump_raw: bool,
    stats: &ExtractStats,
) -> Result<(), CliError> {
    with_file_contents(&job.path, |data| {
        stats.bytes_processed.fetch_add(data.len() as u64, Ordering::Relaxed);
        extract_container(data, &job.stem, &job.output_dir, dump_raw, stats)
    })?
}

/// Writes `<output>/<stem>_<n>.png` for each decodable image (`n` is 1-based), and with
/// `dump_raw` the texel bytes to `<output>/<stem>_raw/i-<n>_<height>_<width>_<FORMAT>`.
///
/// Header-level failures fail the whole container; anything else is logged and counted.
pub fn extract_container(
    data: &[u8],
    stem: &str,
    output: &Path,
    dump_raw: bool,
    stats: &ExtractStats,
) -> Result<(), CliError> {
    let images = extract_images(data)?;
    stats.containers.fetch_add(1, Ordering::Relaxed);
    fs::create_dir_all(output)?;

    if dump_raw {
        write_raw_extents(data, &output.join(format!("{stem}_raw")))?;
    }

    for image in images {
        let number = image.index + 1;
        match image.result {
            Ok(raster) => {
                let target = output.join(format!("{stem}_{number}.png"));
                save_png(raster, &target)?;
                stats.images_written.fetch_add(1, Ordering::Relaxed);
                info!(
                    path = %target.display(),
                    format = image.descriptor.format_name(),
                    "Wrote image"
                );
            }
            Err(e) => {
                stats.images_failed.fetch_add(1, Ordering::Relaxed);
                warn!(container = stem, image = number, error = %e, "Skipped image");
            }
        }
    }

    Ok(())
}

fn write_raw_extents(data: &[u8], dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir)?;
    for extent in raw_extents(data)? {
        let descriptor = &extent.descriptor;
        let name = format!(
            "i-{}_{}_{}_{}",
            extent.index + 1,
            descriptor.height,
            descriptor.width,
            descriptor.format_name()
        );

        match extent.data {
            Ok(bytes) => fs::write(dir.join(name), bytes)?,
            Err(e) => warn!(file = %name, error = %e, "Skipped raw dump"),
        }
    }
    Ok(())
}

fn save_png(raster: RgbaImage, target: &Path) -> Result<(), CliError> {
    let (width, height) = (raster.width(), raster.height());
    let buffer = image::RgbaImage::from_raw(width, height, raster.into_rgba_bytes())
        .ok_or(CliError::RasterSize { width, height })?;

    buffer.save_with_format(target, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Standard container with one 4x4 RGBA32 image and one C8 image.
    fn sample_container() -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0x0020_AF30u32.to_be_bytes());
        out.extend_from_slice(&2u32.to_be_bytes());
        out.extend_from_slice(&0x0Cu32.to_be_bytes());
        // Table: headers at 0x1C and 0x40.
        for header in [0x1Cu32, 0x40] {
            out.extend_from_slice(&header.to_be_bytes());
            out.extend_from_slice(&0u32.to_be_bytes());
        }
        // Data at 0x64 (64 bytes RGBA32) and 0xA4 (32 bytes C8).
        for (format, height, width, data) in [(6u32, 4u16, 4u16, 0x64u32), (9, 4, 8, 0xA4)] {
            out.extend_from_slice(&height.to_be_bytes());
            out.extend_from_slice(&width.to_be_bytes());
            out.extend_from_slice(&format.to_be_bytes());
            out.extend_from_slice(&data.to_be_bytes());
            out.extend_from_slice(&[0u8; 24]);
        }
        out.extend((0..64).map(|i| i as u8));
        out.extend_from_slice(&[0u8; 32]);
        out
    }

    #[test]
    fn writes_png_per_decodable_image_and_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        let stats = ExtractStats::default();

        extract_container(&sample_container(), "logo", dir.path(), false, &stats).unwrap();

        let png = dir.path().join("logo_1.png");
        let decoded = image::open(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 1, 2, 3]);
        assert_eq!(decoded.get_pixel(3, 3).0, [60, 61, 62, 63]);

        assert!(!dir.path().join("logo_2.png").exists());
        assert_eq!(stats.images_written.load(Ordering::Relaxed), 1);
        assert_eq!(stats.images_failed.load(Ordering::Relaxed), 1);
        assert_eq!(stats.containers.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn dump_raw_writes_texel_bytes_with_descriptive_names() {
        let dir = tempfile::tempdir().unwrap();
        let stats = ExtractStats::default();

        extract_container(&sample_container(), "logo", dir.path(), true, &stats).unwrap();

        let raw_dir = dir.path().join("logo_raw");
        let rgba = fs::read(raw_dir.join("i-1_4_4_RGBA32")).unwrap();
        assert_eq!(rgba, (0..64).map(|i| i as u8).collect::<Vec<_>>());
        assert_eq!(fs::read(raw_dir.join("i-2_4_8_C8")).unwrap(), vec![0u8; 32]);
    }

    #[test]
    fn bad_magic_fails_the_container() {
        let dir = tempfile::tempdir().unwrap();
        let stats = ExtractStats::default();
        let mut data = sample_container();
        data[0] = 0x12;

        let result = extract_container(&data, "broken", dir.path(), false, &stats);
        assert!(matches!(result, Err(CliError::Extract(e)) if e.is_container_fatal()));
        assert_eq!(stats.containers.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn directory_mode_only_picks_tpl_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.tpl"), sample_container()).unwrap();
        fs::write(dir.path().join("notes.txt"), b"not a texture container").unwrap();
        fs::write(dir.path().join("empty.bin"), b"").unwrap();

        let containers = collect_containers(dir.path()).unwrap();
        assert_eq!(containers, vec![dir.path().join("a.tpl")]);
    }

    #[test]
    fn extract_container_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("menu.tpl");
        fs::write(&input, sample_container()).unwrap();
        let output = dir.path().join("out");
        let stats = ExtractStats::default();
        let job = ExtractJob {
            path: input,
            output_dir: output.clone(),
            stem: "menu".to_owned(),
        };

        extract_container_file(&job, false, &stats).unwrap();

        assert!(output.join("menu_1.png").exists());
        assert_eq!(
            stats.bytes_processed.load(Ordering::Relaxed),
            sample_container().len() as u64
        );
    }

    #[test]
    fn containers_sharing_a_stem_in_different_directories_keep_their_own_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir_all(input.join("a")).unwrap();
        fs::create_dir_all(input.join("b")).unwrap();

        let mut second = sample_container();
        second[0x64] = 0xFF; // First texel of the RGBA32 image.
        fs::write(input.join("a/logo.tpl"), sample_container()).unwrap();
        fs::write(input.join("b/logo.tpl"), &second).unwrap();

        let containers = collect_containers(&input).unwrap();
        let (jobs, collisions) = plan_jobs(containers, &input, &output);
        assert!(collisions.is_empty());

        let stats = ExtractStats::default();
        for job in &jobs {
            extract_container_file(job, true, &stats).unwrap();
        }

        let first = image::open(output.join("a/logo_1.png")).unwrap().to_rgba8();
        let second = image::open(output.join("b/logo_1.png")).unwrap().to_rgba8();
        assert_eq!(first.get_pixel(0, 0).0, [0, 1, 2, 3]);
        assert_eq!(second.get_pixel(0, 0).0, [0xFF, 1, 2, 3]);
        assert!(output.join("a/logo_raw/i-1_4_4_RGBA32").exists());
        assert!(output.join("b/logo_raw/i-1_4_4_RGBA32").exists());
        assert!(!output.join("logo_1.png").exists());
        assert_eq!(stats.images_written.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn same_stem_in_one_directory_is_a_collision() {
        let input = PathBuf::from("/in");
        let output = PathBuf::from("/out");
        let containers = vec![input.join("logo.bin"), input.join("logo.tpl"), input.join("menu.tpl")];

        let (jobs, collisions) = plan_jobs(containers, &input, &output);

        let planned: Vec<_> = jobs.iter().map(|job| job.path.clone()).collect();
        assert_eq!(planned, vec![input.join("logo.bin"), input.join("menu.tpl")]);
        assert_eq!(collisions.len(), 1);
        assert!(matches!(
            &collisions[0],
            CliError::InFile { path, source }
                if *path == input.join("logo.tpl")
                    && matches!(**source, CliError::OutputCollision { ref first } if *first == input.join("logo.bin"))
        ));
    }

    #[test]
    fn single_file_input_writes_directly_into_output() {
        let input = PathBuf::from("/in/logo.tpl");
        let (jobs, _) = plan_jobs(vec![input.clone()], &input, Path::new("/out"));
        assert_eq!(
            jobs,
            vec![ExtractJob {
                path: input,
                output_dir: PathBuf::from("/out"),
                stem: "logo".to_owned(),
            }]
        );
    }
}
