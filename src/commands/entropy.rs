use crate::analysis::shannon_entropy;
use crate::cli::EntropyArgs;
use crate::msa::read_fasta;
use crate::utils::{open_text_reader, read_scores, Result};
use crate::viz::{plot_entropy, BarParams};
use gridplot::generate_image;
use std::io::BufRead;
use std::path::Path;

pub fn entropy(args: EntropyArgs) -> Result<()> {
    let params = BarParams {
        color: args.color,
        title: args.title,
        xlabel: None,
        ylabel: None,
    };
    let indices = match &args.indices_path {
        Some(path) => Some(load_indices(path)?),
        None => None,
    };

    let plot = if let Some(path) = &args.msa_path {
        let msa = read_fasta(open_text_reader(path)?)?;
        log::info!(
            "Loaded alignment with {} sequences and {} positions",
            msa.depth(),
            msa.width()
        );
        if args.keep_gaps {
            let scores = shannon_entropy(&msa, false);
            plot_entropy(&scores, indices.as_deref(), &params)?
        } else {
            plot_entropy(&msa, indices.as_deref(), &params)?
        }
    } else {
        let scores_path = args.scores_path.as_ref().unwrap();
        let scores = read_scores(open_text_reader(scores_path)?)?;
        log::info!("Loaded {} entropy values", scores.len());
        plot_entropy(&scores, indices.as_deref(), &params)?
    };

    generate_image(&plot, Path::new(&args.output_path))?;
    Ok(())
}

fn load_indices(path: &Path) -> Result<Vec<i64>> {
    let mut indices = Vec::new();
    for line in open_text_reader(path)?.lines() {
        let line = line.map_err(|e| e.to_string())?;
        for field in line.split_whitespace() {
            let index = field
                .parse::<i64>()
                .map_err(|_| format!("Could not parse residue number: {}", field))?;
            indices.push(index);
        }
    }
    Ok(indices)
}
