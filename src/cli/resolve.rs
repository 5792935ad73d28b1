//! Approve / reject commands

use super::{open_desk, render, LoginArgs};
use crate::models::{Decision, RequestId, Role};
use crate::Result;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Request ID
    pub id: RequestId,

    #[command(flatten)]
    pub login: LoginArgs,
}

pub fn run(
    project_root: &Path,
    data_dir: Option<&Path>,
    args: ResolveArgs,
    decision: Decision,
) -> Result<()> {
    let mut desk = open_desk(project_root, data_dir)?;
    let password = args.login.password()?;
    desk.login(Role::Admin, &args.login.user, &password)?;

    let request = desk.resolve(args.id, decision)?;

    println!();
    render::print_request(&request);
    Ok(())
}
