use std::path::PathBuf;

use geotrivia_engine::GeometryProvider as _;
use geotrivia_geometry::PlanarGeometryProvider;
use serde::Serialize;

use crate::util::{CatalogSourceArg, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    #[clap(flatten)]
    source: CatalogSourceArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct QuestionEntry<'a> {
    index: usize,
    text: &'a str,
    answer_label: &'a str,
    fun_fact: &'a str,
    extent: ExtentEntry,
}

#[derive(Debug, Serialize)]
struct ExtentEntry {
    width: f64,
    height: f64,
    center: [f64; 2],
}

pub(crate) async fn run(arg: &CatalogArg) -> anyhow::Result<()> {
    let catalog = arg.source.load().await?;

    let entries = catalog
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let extent = PlanarGeometryProvider.extent(question.geometry())?;
            Ok(QuestionEntry {
                index,
                text: question.text(),
                answer_label: question.answer_label(),
                fun_fact: question.fun_fact(),
                extent: ExtentEntry {
                    width: extent.width,
                    height: extent.height,
                    center: [extent.center.x(), extent.center.y()],
                },
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Output::save_json(&entries, arg.output.clone())
}
