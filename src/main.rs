use anyhow::Context;
use clap::Parser;
use filedrop::{DiskFile, FileCollection, FileIngestor};
use std::path::PathBuf;

/// Read files and zip archives into flat text records
#[derive(Parser, Debug)]
#[command(name = "filedrop", version, about)]
struct Args {
    /// Files or zip archives to ingest; directories are walked recursively
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Emit the flattened records as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut files = FileCollection::new();
    for path in &args.paths {
        if path.is_dir() {
            let walked = FileCollection::from_dir(path)
                .with_context(|| format!("failed to walk directory {}", path.display()))?;
            for handle in walked.iter() {
                files.push_arc(handle.clone());
            }
        } else {
            files.push(DiskFile::new(path));
        }
    }

    let ingestor = FileIngestor::with_zip();
    let records = ingestor
        .ingest_collection(&files)
        .await
        .context("ingestion failed")?
        .simplify();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  {:>8} bytes  sha256:{}",
            record.name,
            record.content.len(),
            record.digest()
        );
    }
    println!("{} records total", records.len());

    Ok(())
}
