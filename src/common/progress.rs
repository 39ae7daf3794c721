use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the DOIs of one run
pub fn create_doi_progress_bar(total_dois: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_dois);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} DOIs {msg}")
            .expect("Failed to create progress style")
            .progress_chars("#>-")
    );
    pb
}

