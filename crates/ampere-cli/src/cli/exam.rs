use crate::cli::session::{Ending, Terminal};
use crate::cli::{load, render};
use crate::opt::Exam;
use ampere_core::exam::{ExamSession, Strategy};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

pub(crate) async fn exam(opt: Exam) -> Result<()> {
    let bank = load::bank(&opt.file).await?;
    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let strategy = if opt.balanced { Strategy::Balanced } else { Strategy::Uniform };
    let mut exam = ExamSession::draw(&bank, opt.count, strategy, &mut rng)?;

    let config = exam.config();
    let time_limit = config.time_limit;
    print!("{}: {} questions, pass mark {}%", bank.title, exam.quiz().len(), config.pass_threshold);
    if let Some(limit) = time_limit {
        print!(", {} minutes", limit.as_secs().div_ceil(60));
    }
    println!("\n");

    let started = Instant::now();
    let ending = Terminal::new()?.run(exam.quiz_mut(), false)?;
    if ending == Ending::Exited {
        println!("Exam abandoned after {} answers.", exam.quiz().answered());
        return Ok(());
    }
    if let Some(result) = exam.finish(started.elapsed()) {
        print!("{}", render::exam_result(&result, time_limit));
    }
    Ok(())
}
