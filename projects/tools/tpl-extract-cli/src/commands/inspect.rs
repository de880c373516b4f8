use crate::error::CliError;
use crate::util::existing_cli_path;
use argh::FromArgs;
use std::io::{self, Write};
use std::path::PathBuf;
use tpl_extract_api::{with_file_contents, ExtractError};
use tpl_extract_tpl::{parse_tpl, resolve_extents};

#[derive(FromArgs, Debug)]
/// Print the header and image table of a TPL file without decoding it
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// input TPL file
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    with_file_contents(&cmd.input, |data| write_report(data, &mut out))?
        .map_err(|e| e.in_file(&cmd.input))?;
    Ok(())
}

/// Writes the container header followed by one line per image.
pub fn write_report(data: &[u8], out: &mut impl Write) -> Result<(), CliError> {
    let file = parse_tpl(data).map_err(ExtractError::from)?;
    let header = &file.header;

    writeln!(out, "Magic number: {:08x} ({})", header.magic, header.kind.name())?;
    writeln!(out, "Number of images: {}", header.image_count)?;
    writeln!(out, "Image table offset: {:08x}", header.image_table_offset)?;

    let extents = resolve_extents(&file.descriptors, data.len());
    for (descriptor, extent) in file.descriptors.iter().zip(extents) {
        let sampler = &descriptor.sampler;
        let length = match extent {
            Ok(range) => range.len().to_string(),
            Err(e) => format!("invalid ({e})"),
        };
        let palette = match descriptor.palette_header_offset {
            Some(offset) => format!("{offset:08x}"),
            None => "none".to_owned(),
        };

        writeln!(
            out,
            "Image {}: {}x{} {} data={:08x} len={} wrap=({}, {}) filter=({}, {}) lod_bias={} edge_lod={} lod=({}, {}) palette={}",
            descriptor.index + 1,
            descriptor.width,
            descriptor.height,
            descriptor.format_name(),
            descriptor.data_offset,
            length,
            sampler.wrap_s,
            sampler.wrap_t,
            sampler.min_filter,
            sampler.mag_filter,
            sampler.lod_bias,
            sampler.edge_lod_enable,
            sampler.min_lod,
            sampler.max_lod,
            palette,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_with_one_i4_image() -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"TPLx");
        out.extend_from_slice(&1u32.to_be_bytes());
        out.extend_from_slice(&0x0Cu32.to_be_bytes());
        out.extend_from_slice(&0x14u32.to_be_bytes());
        out.extend_from_slice(&0x200u32.to_be_bytes()); // palette header offset
        out.extend_from_slice(&8u16.to_be_bytes());
        out.extend_from_slice(&16u16.to_be_bytes());
        out.extend_from_slice(&0u32.to_be_bytes()); // I4
        out.extend_from_slice(&0x38u32.to_be_bytes());
        out.extend_from_slice(&[0u8; 24]);
        out.extend_from_slice(&[0u8; 64]);
        out
    }

    #[test]
    fn reports_header_and_descriptor() {
        let mut out = Vec::new();
        write_report(&container_with_one_i4_image(), &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "Magic number: 54504c78 (TPLx)");
        assert_eq!(lines[1], "Number of images: 1");
        assert_eq!(lines[2], "Image table offset: 0000000c");
        assert!(lines[3].starts_with("Image 1: 16x8 I4 data=00000038 len=64 "), "{}", lines[3]);
        assert!(lines[3].ends_with("palette=00000200"), "{}", lines[3]);
    }

    #[test]
    fn invalid_magic_is_an_error() {
        let mut data = container_with_one_i4_image();
        data[..4].copy_from_slice(b"RIFF");

        let mut out = Vec::new();
        assert!(matches!(
            write_report(&data, &mut out),
            Err(CliError::Extract(ExtractError::Container(_)))
        ));
        assert!(out.is_empty());
    }
}
