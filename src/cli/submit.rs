//! Submit command

use super::{open_desk, render, LoginArgs};
use crate::models::{RequestFields, Role};
use crate::Result;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub login: LoginArgs,

    /// Student name
    #[arg(long)]
    pub student: String,

    /// Grade (e.g. "3rd Grade")
    #[arg(long)]
    pub grade: String,

    /// Subject (e.g. "Mathematics")
    #[arg(long)]
    pub subject: String,

    /// What the student needs help with
    #[arg(short, long)]
    pub message: String,
}

pub fn run(project_root: &Path, data_dir: Option<&Path>, args: SubmitArgs) -> Result<()> {
    let mut desk = open_desk(project_root, data_dir)?;
    let password = args.login.password()?;
    desk.login(Role::Manager, &args.login.user, &password)?;

    let fields = RequestFields::new(args.student, args.grade, args.subject, args.message);
    let request = desk.submit(fields)?;

    println!();
    render::print_request(&request);
    Ok(())
}
