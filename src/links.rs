//! External link targets and the platform opener.

use std::fmt;
use std::process::{Command, Stdio};
use std::str::FromStr;

use thiserror::Error;

use crate::types::Contact;

/// Error launching the system opener.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("no {0} link configured")]
    Missing(Link),

    #[error("could not launch {program} for {target}: {source}")]
    Launch {
        program: &'static str,
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// A contact link that can be opened externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Link {
    Website,
    Email,
    #[value(name = "linkedin")]
    LinkedIn,
    #[value(name = "github")]
    GitHub,
    Blog,
}

impl Link {
    pub const ALL: [Link; 5] = [
        Link::Website,
        Link::Email,
        Link::LinkedIn,
        Link::GitHub,
        Link::Blog,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Link::Website => "website",
            Link::Email => "email",
            Link::LinkedIn => "linkedin",
            Link::GitHub => "github",
            Link::Blog => "blog",
        }
    }

    /// Spinner label.
    pub fn label(self) -> &'static str {
        match self {
            Link::Website => "website",
            Link::Email => "email client",
            Link::LinkedIn => "LinkedIn",
            Link::GitHub => "GitHub",
            Link::Blog => "blog",
        }
    }

    /// The URL to hand to the opener. Email becomes a `mailto:` URL.
    pub fn target(self, contact: &Contact) -> Result<String, LinkError> {
        let raw = match self {
            Link::Website => &contact.website,
            Link::Email => &contact.email,
            Link::LinkedIn => &contact.linkedin,
            Link::GitHub => &contact.github,
            Link::Blog => &contact.blog,
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LinkError::Missing(self));
        }
        Ok(match self {
            Link::Email => format!("mailto:{}", raw),
            _ => raw.to_string(),
        })
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Link {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Link::ALL
            .into_iter()
            .find(|link| link.name() == s)
            .ok_or_else(|| format!("unknown link: {}", s))
    }
}

/// Program and leading args used to open a URL on this platform.
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Hand a URL to the system opener without waiting for it.
pub fn open(target: &str) -> Result<(), LinkError> {
    let (program, args) = opener_command();
    tracing::info!(program, target, "opening link");
    Command::new(program)
        .args(args)
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|source| LinkError::Launch {
            program,
            target: target.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio;

    #[test]
    fn email_target_is_mailto() {
        let p = portfolio::bundled().unwrap();
        let target = Link::Email.target(&p.contact).unwrap();
        assert_eq!(target, format!("mailto:{}", p.contact.email));
    }

    #[test]
    fn url_targets_pass_through() {
        let p = portfolio::bundled().unwrap();
        assert_eq!(Link::GitHub.target(&p.contact).unwrap(), p.contact.github);
        assert_eq!(Link::Blog.target(&p.contact).unwrap(), p.contact.blog);
    }

    #[test]
    fn blank_link_is_missing() {
        let mut p = portfolio::bundled().unwrap();
        p.contact.blog = "  ".to_string();
        assert!(matches!(
            Link::Blog.target(&p.contact),
            Err(LinkError::Missing(Link::Blog))
        ));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("LinkedIn".parse::<Link>().unwrap(), Link::LinkedIn);
        assert_eq!(" github ".parse::<Link>().unwrap(), Link::GitHub);
        assert!("twitter".parse::<Link>().is_err());
    }

    #[test]
    fn every_link_round_trips_through_display() {
        for link in Link::ALL {
            assert_eq!(link.to_string().parse::<Link>().unwrap(), link);
        }
    }

    #[test]
    fn opener_is_known_program() {
        let (program, _) = opener_command();
        assert!(["open", "cmd", "xdg-open"].contains(&program));
    }
}
