use tinct_cli::{format_apply_report, parse_color, parse_filter_values};

pub fn cmd_apply(values: String, target: Option<String>) -> Result<(), String> {
    let values = parse_filter_values(&values)?;
    let target = target.as_deref().map(parse_color).transpose()?;

    print!("{}", format_apply_report(&values, target));
    Ok(())
}
