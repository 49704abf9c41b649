use std::fs;

use serde::Serialize;
use url::Url;

use crate::cli::LinkArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::hash::{HashParams, ViewMode};

#[derive(Debug, Clone, Serialize)]
struct LinkView {
    link: String,
    params: HashParams,
}

pub fn run(ctx: &AppContext, args: LinkArgs) -> AppResult<()> {
    let base = args.base.clone();
    let params = build_params(args)?;
    let link = build_link(base.as_deref(), &params)?;

    tracing::info!(length = link.len(), "built fragment link");
    ctx.output.emit(&[link.clone()], &LinkView { link, params })
}

fn build_params(args: LinkArgs) -> AppResult<HashParams> {
    let view_mode = args
        .view
        .as_deref()
        .map(|tag| {
            ViewMode::from_tag(tag).ok_or_else(|| {
                let known = ViewMode::ALL.map(ViewMode::tag).join(", ");
                AppError::InvalidInput(format!("unknown view {tag:?}. expected one of {known}"))
            })
        })
        .transpose()?;

    let b64data = match args.file {
        Some(path) => Some(fs::read(path)?),
        None => None,
    };

    Ok(HashParams {
        profile_url: args.profile_url,
        title: args.title,
        local_profile_path: args.local_profile_path,
        view_mode,
        b64data,
        custom_filename: args.custom_filename,
    })
}

fn build_link(base: Option<&str>, params: &HashParams) -> AppResult<String> {
    let fragment = params.to_fragment();
    let Some(base) = base else {
        return Ok(fragment);
    };

    let mut url = Url::parse(base)?;
    url.set_fragment(Some(&fragment[1..]));
    Ok(url.to_string())
}
