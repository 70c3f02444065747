use crate::analysis::{apply_apc, mutinfo_matrix};
use crate::cli::MutinfoArgs;
use crate::msa::read_fasta;
use crate::utils::{open_text_reader, read_matrix, Result};
use crate::viz::{plot_mutinfo, HeatmapParams};
use gridplot::generate_image;
use std::path::Path;

pub fn mutinfo(args: MutinfoArgs) -> Result<()> {
    let params = HeatmapParams {
        interpolation: args.interpolation,
        origin: args.origin,
        title: args.title,
    };

    let plot = if let Some(path) = &args.msa_path {
        let msa = read_fasta(open_text_reader(path)?)?;
        log::info!(
            "Loaded alignment with {} sequences and {} positions",
            msa.depth(),
            msa.width()
        );
        if args.apc {
            let matrix = apply_apc(&mutinfo_matrix(&msa))?;
            plot_mutinfo(&matrix, &params)?
        } else {
            plot_mutinfo(&msa, &params)?
        }
    } else {
        let matrix_path = args.matrix_path.as_ref().unwrap();
        let mut matrix = read_matrix(open_text_reader(matrix_path)?)?;
        log::info!("Loaded a matrix with {} rows", matrix.len());
        if args.apc {
            matrix = apply_apc(&matrix)?;
        }
        plot_mutinfo(&matrix, &params)?
    };

    generate_image(&plot, Path::new(&args.output_path))?;
    Ok(())
}
