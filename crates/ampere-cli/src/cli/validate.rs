use crate::opt::Validate;
use ampere_config::course::CourseConfig;
use ampere_utils::loader::Filter;
use ampere_utils::loader::file_system::FileSystemLoader;
use anyhow::{Error, Result, anyhow};
use futures::StreamExt;

pub(crate) async fn validate(opt: Validate) -> Result<(), Error> {
    let loader = FileSystemLoader::default();
    let mut files = loader.load_paths(&opt.paths, Filter::Yaml);
    let mut course = CourseConfig::default();
    let mut errors = 0;
    let mut checked = 0;

    while let Some(file) = files.next().await {
        let file = file?;
        checked += 1;
        if let Err(err) = course.add(&file) {
            eprintln!("error: {:#}", Error::from(err));
            errors += 1;
        }
    }
    if checked == 0 {
        return Err(anyhow!("no content files found in {:?}", opt.paths));
    }

    let warnings = course.warnings();
    for (id, warning) in &warnings {
        eprintln!("warning: {id}: {warning}");
    }

    let summary = format!(
        "{} pages and {} question banks in {checked} files",
        course.pages.len(),
        course.banks.len()
    );
    if errors > 0 {
        return Err(anyhow!("{summary}: {errors} errors"));
    }
    if opt.strict && !warnings.is_empty() {
        return Err(anyhow!("{summary}: {} warnings", warnings.len()));
    }
    println!("{summary} are ok 👌");
    Ok(())
}
