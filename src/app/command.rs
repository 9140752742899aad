//! Editor Commands
//!
//! One line of shell input becomes one command. Field paths follow the
//! document layout (`discord.enabled`, `shop.great_ball.buy_one`, ...).

use crate::constants::CATCH_TIERS;
use crate::domain::{Language, Theme};
use crate::error::{Error, Result};
use crate::features::{CatchEdit, DiscordEdit, GeneralEdit, ShopEdit, StatsEdit};
use crate::validation::{PriceField, StatField};

pub const HELP: &str = "\
commands:
  show                                 print the draft document
  status                               dirty flag, validity and save state
  set language <pt-br|es-la|en-us>
  set theme <latte|frappe|macchiato|mocha|none>
  set channel <name>
  blur channel                         re-check the channel field
  set discord.<enabled|ping_user> <true|false>
  toggle discord.<enabled|ping_user>
  set discord.webhook_url <url>
  expand discord                       show/hide the discord panel
  set shop.<ball>.<buy_one|buy_ten> <amount>
  set shop.<ball>.buy_on_missing <true|false>
  toggle shop.<ball>.buy_on_missing
  set stats_balls.<field> <value>
  clear stats_balls.<field>
  set catch.treat_uncapt_as_capt <true|false>
  toggle catch.treat_uncapt_as_capt
  add catch.<tier> <ball>
  remove catch.<tier> <ball>
  move catch.<tier> <from> <to>
  save                                 commit the whole draft
  reset                                discard the draft
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Status,
    Help,
    Save,
    Reset,
    Quit,
    BlurChannel,
    ToggleDiscordPanel,
    General(GeneralEdit),
    Shop(ShopEdit),
    Catch(CatchEdit),
    Stats(StatsEdit),
    Discord(DiscordEdit),
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Invalid {
        message: message.into(),
    }
}

fn parse_bool(value: Option<&str>) -> Result<bool> {
    match value {
        Some("true" | "on" | "yes") => Ok(true),
        Some("false" | "off" | "no") => Ok(false),
        other => Err(invalid(format!("expected true/false, got {other:?}"))),
    }
}

fn parse_int(value: Option<&str>) -> Result<i64> {
    let value = value.ok_or_else(|| invalid("missing number"))?;
    value
        .parse()
        .map_err(|_| invalid(format!("not a number: {value}")))
}

fn parse_index(value: Option<&str>) -> Result<usize> {
    let value = value.ok_or_else(|| invalid("missing position"))?;
    value
        .parse()
        .map_err(|_| invalid(format!("not a position: {value}")))
}

fn capture_tier(path: &str) -> Result<String> {
    path.strip_prefix("catch.")
        .filter(|tier| CATCH_TIERS.iter().any(|known| known == tier))
        .map(str::to_string)
        .ok_or_else(|| invalid(format!("not a capture tier: {path}")))
}

fn required<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
    value.ok_or_else(|| invalid(format!("missing {what}")))
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(invalid("empty command"));
        };
        let path = words.next();
        let arg = words.next();

        let command = match (verb, path) {
            ("show", None) => Command::Show,
            ("status", None) => Command::Status,
            ("help", None) => Command::Help,
            ("save", None) => Command::Save,
            ("reset", None) => Command::Reset,
            ("quit" | "exit", None) => Command::Quit,
            ("blur", Some("channel")) => Command::BlurChannel,
            ("expand", Some("discord")) => Command::ToggleDiscordPanel,
            ("set", Some(path)) => Self::parse_set(path, arg)?,
            ("toggle", Some(path)) => Self::parse_toggle(path)?,
            ("clear", Some(path)) => {
                let field = path
                    .strip_prefix("stats_balls.")
                    .and_then(StatField::from_name)
                    .ok_or_else(|| invalid(format!("cannot clear {path}")))?;
                Command::Stats(StatsEdit::Clear(field))
            }
            ("add" | "remove" | "move", Some(path)) => {
                let tier = capture_tier(path)?;
                let edit = match verb {
                    "add" => CatchEdit::AddBall {
                        tier,
                        ball: required(arg, "ball")?.to_string(),
                    },
                    "remove" => CatchEdit::RemoveBall {
                        tier,
                        ball: required(arg, "ball")?.to_string(),
                    },
                    _ => CatchEdit::MoveBall {
                        tier,
                        from: parse_index(arg)?,
                        to: parse_index(words.next())?,
                    },
                };
                Command::Catch(edit)
            }
            _ => return Err(invalid(format!("unknown command: {}", line.trim()))),
        };

        if words.next().is_some() {
            return Err(invalid(format!("too many arguments: {}", line.trim())));
        }
        Ok(command)
    }

    fn parse_set(path: &str, arg: Option<&str>) -> Result<Self> {
        let command = match path {
            "language" => {
                let code = required(arg, "language")?;
                let language = Language::from_code(code)
                    .ok_or_else(|| invalid(format!("unknown language: {code}")))?;
                Command::General(GeneralEdit::Language(language))
            }
            "theme" => {
                let name = required(arg, "theme")?;
                let theme = match name {
                    "none" => None,
                    _ => Some(
                        Theme::from_name(name)
                            .ok_or_else(|| invalid(format!("unknown theme: {name}")))?,
                    ),
                };
                Command::General(GeneralEdit::Theme(theme))
            }
            "channel" => Command::General(GeneralEdit::Channel(arg.unwrap_or("").to_string())),
            "discord.enabled" => Command::Discord(DiscordEdit::Enabled(parse_bool(arg)?)),
            "discord.ping_user" => Command::Discord(DiscordEdit::PingUser(parse_bool(arg)?)),
            "discord.webhook_url" => {
                Command::Discord(DiscordEdit::WebhookUrl(arg.unwrap_or("").to_string()))
            }
            "catch.treat_uncapt_as_capt" => {
                Command::Catch(CatchEdit::TreatUncaptAsCapt(parse_bool(arg)?))
            }
            _ => {
                if let Some(field) = path.strip_prefix("stats_balls.") {
                    let field = StatField::from_name(field)
                        .ok_or_else(|| invalid(format!("unknown stat: {field}")))?;
                    Command::Stats(StatsEdit::Set(field, parse_int(arg)?))
                } else if let Some(rest) = path.strip_prefix("shop.") {
                    let (ball, field) = rest
                        .rsplit_once('.')
                        .ok_or_else(|| invalid(format!("expected shop.<ball>.<field>: {path}")))?;
                    let ball = ball.to_string();
                    if field == "buy_on_missing" {
                        Command::Shop(ShopEdit::BuyOnMissing {
                            ball,
                            value: parse_bool(arg)?,
                        })
                    } else {
                        let field = PriceField::from_name(field)
                            .ok_or_else(|| invalid(format!("unknown shop field: {field}")))?;
                        Command::Shop(ShopEdit::Price {
                            ball,
                            field,
                            value: parse_int(arg)?,
                        })
                    }
                } else if path.starts_with("catch.") {
                    let tier = capture_tier(path)?;
                    // Whole-tier replacement: comma separated, order kept
                    let balls = required(arg, "ball list")?
                        .split(',')
                        .filter(|b| !b.is_empty())
                        .map(str::to_string)
                        .collect();
                    Command::Catch(CatchEdit::SetTier { tier, balls })
                } else {
                    return Err(invalid(format!("unknown field: {path}")));
                }
            }
        };
        Ok(command)
    }

    fn parse_toggle(path: &str) -> Result<Self> {
        let command = match path {
            "discord.enabled" => Command::Discord(DiscordEdit::ToggleEnabled),
            "discord.ping_user" => Command::Discord(DiscordEdit::TogglePingUser),
            "catch.treat_uncapt_as_capt" => Command::Catch(CatchEdit::ToggleTreatUncaptAsCapt),
            _ => {
                let ball = path
                    .strip_prefix("shop.")
                    .and_then(|rest| rest.strip_suffix(".buy_on_missing"))
                    .ok_or_else(|| invalid(format!("cannot toggle {path}")))?;
                Command::Shop(ShopEdit::ToggleBuyOnMissing {
                    ball: ball.to_string(),
                })
            }
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).expect("command should parse")
    }

    #[test]
    fn parses_general_fields() {
        assert_eq!(
            parse("set language en-us"),
            Command::General(GeneralEdit::Language(Language::EnUs))
        );
        assert_eq!(parse("set theme none"), Command::General(GeneralEdit::Theme(None)));
        assert_eq!(
            parse("set channel MyChannel1"),
            Command::General(GeneralEdit::Channel("MyChannel1".to_string()))
        );
        assert_eq!(
            parse("set channel"),
            Command::General(GeneralEdit::Channel(String::new()))
        );
    }

    #[test]
    fn parses_nested_paths() {
        assert_eq!(
            parse("set shop.great_ball.buy_ten 6500"),
            Command::Shop(ShopEdit::Price {
                ball: "great_ball".to_string(),
                field: PriceField::BuyTen,
                value: 6500,
            })
        );
        assert_eq!(
            parse("toggle shop.poke_ball.buy_on_missing"),
            Command::Shop(ShopEdit::ToggleBuyOnMissing {
                ball: "poke_ball".to_string()
            })
        );
        assert_eq!(
            parse("set stats_balls.feather_ball 40"),
            Command::Stats(StatsEdit::Set(StatField::FeatherBall, 40))
        );
        assert_eq!(
            parse("move catch.S 3 0"),
            Command::Catch(CatchEdit::MoveBall {
                tier: "S".to_string(),
                from: 3,
                to: 0
            })
        );
        assert_eq!(
            parse("set catch.C poke_ball,great_ball"),
            Command::Catch(CatchEdit::SetTier {
                tier: "C".to_string(),
                balls: vec!["poke_ball".to_string(), "great_ball".to_string()],
            })
        );
    }

    #[test]
    fn rejects_bad_input() {
        for line in [
            "",
            "fly",
            "set language klingon",
            "set discord.enabled maybe",
            "set stats_balls.heavy_ball lots",
            "set shop.great_ball.buy_twice 1",
            "toggle channel",
            "add catch.Z poke_ball",
            "save now",
        ] {
            assert!(Command::parse(line).is_err(), "{line:?} should fail");
        }
    }
}
