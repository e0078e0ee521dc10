//! Native [`XsltEngine`] backend that drives the platform `xsltproc` binary.
//!
//! `xsltproc` is libxslt's command-line processor and is the standard XSLT
//! engine on every platform the CLI targets. libxslt resolves `document()`
//! references relative to the stylesheet's own location and has no embedded
//! scripting facility, which matches the loading requirements of the
//! reference stylesheet. Output formatting (indentation, omitted XML
//! declaration, HTML-permissive serialization) follows the stylesheet's own
//! `xsl:output` directives.

use log::debug;
use pepview_engine::{
    EngineError, LANGUAGE_PARAM, StylesheetSource, TransformRequest, XmlSource, XsltEngine,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name of the processor binary looked up on `PATH`.
pub const XSLTPROC_BINARY: &str = "xsltproc";

// Exit codes documented in xsltproc(1).
const EXIT_STYLESHEET_PARSE: i32 = 4;
const EXIT_STYLESHEET_ERROR: i32 = 5;
const EXIT_DOCUMENT_ERROR: i32 = 6;

/// An [`XsltEngine`] that shells out to `xsltproc`.
///
/// The binary is located once, at construction time; every transform spawns
/// a fresh process. Sources supplied as in-memory text are piped on stdin.
#[derive(Debug, Clone)]
pub struct XsltprocEngine {
    binary: PathBuf,
}

impl XsltprocEngine {
    /// Locates `xsltproc` on `PATH`.
    ///
    /// Fails with [`EngineError::Unavailable`] when the binary is not
    /// installed.
    pub fn discover() -> Result<Self, EngineError> {
        let binary = which::which(XSLTPROC_BINARY).map_err(|e| {
            EngineError::Unavailable(format!("{XSLTPROC_BINARY} not found on PATH: {e}"))
        })?;
        debug!("using XSLT processor at {}", binary.display());
        Ok(Self { binary })
    }

    /// Uses an explicit processor binary instead of searching `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the processor binary this engine spawns.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self, language: &str, stylesheet: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        // --loaddtd: parse external DTDs so entity references in source
        // documents resolve, mirroring how the stylesheet expects its
        // inputs to be read.
        cmd.arg("--loaddtd")
            .arg("--stringparam")
            .arg(LANGUAGE_PARAM)
            .arg(language)
            .arg(stylesheet)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl XsltEngine for XsltprocEngine {
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, EngineError> {
        let stylesheet = match request.stylesheet {
            StylesheetSource::Path(path) => {
                if !path.is_file() {
                    return Err(EngineError::NotFound(path.to_path_buf()));
                }
                path
            }
            StylesheetSource::Text(_) => {
                return Err(EngineError::Unavailable(
                    "xsltproc requires the stylesheet as a file path so that \
                     document() references can resolve relative to it"
                        .to_string(),
                ));
            }
        };

        let mut cmd = self.command(request.language.as_str(), stylesheet);
        let output = match request.source {
            XmlSource::Path(path) => {
                if !path.is_file() {
                    return Err(EngineError::NotFound(path.to_path_buf()));
                }
                debug!("transforming {} with {}", path.display(), stylesheet.display());
                cmd.arg(path).stdin(Stdio::null()).output()?
            }
            XmlSource::Text(xml) => {
                debug!("transforming in-memory XML with {}", stylesheet.display());
                cmd.arg("-").stdin(Stdio::piped());
                let mut child = cmd.spawn()?;
                // Feed stdin from its own thread so the stdout/stderr pipes
                // keep draining; writing inline deadlocks once the processor
                // fills a pipe buffer while the parent is still writing.
                let stdin = child.stdin.take();
                let body = xml.to_string();
                let feeder = std::thread::spawn(move || -> std::io::Result<()> {
                    let Some(mut stdin) = stdin else { return Ok(()) };
                    match stdin.write_all(body.as_bytes()) {
                        // A broken pipe means the processor already exited;
                        // its exit status carries the real failure.
                        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                        other => other,
                    }
                });
                let output = child.wait_with_output()?;
                feeder
                    .join()
                    .map_err(|_| std::io::Error::other("stdin writer thread panicked"))??;
                output
            }
        };

        if output.status.success() {
            return String::from_utf8(output.stdout)
                .map_err(|e| EngineError::Transform(format!("non-UTF-8 engine output: {e}")));
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(match output.status.code() {
            Some(EXIT_STYLESHEET_PARSE) | Some(EXIT_STYLESHEET_ERROR) => {
                EngineError::Transform(format!(
                    "stylesheet {} rejected: {stderr}",
                    stylesheet.display()
                ))
            }
            Some(EXIT_DOCUMENT_ERROR) => EngineError::Parse(stderr),
            code => EngineError::Transform(format!(
                "{XSLTPROC_BINARY} exited with {code:?}: {stderr}"
            )),
        })
    }

    fn name(&self) -> &'static str {
        XSLTPROC_BINARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pepview_engine::LanguageCode;
    use std::fs;
    use tempfile::tempdir;

    const ECHO_LANGUAGE_XSL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:output method="html" indent="yes"/>
  <xsl:param name="languageCode">en</xsl:param>
  <xsl:template match="/">
    <html>
      <body>
        <p id="lang"><xsl:value-of select="$languageCode"/></p>
        <p id="root"><xsl:value-of select="name(/*)"/></p>
      </body>
    </html>
  </xsl:template>
</xsl:stylesheet>"#;

    /// Engine-dependent tests skip silently when xsltproc is not installed.
    fn engine() -> Option<XsltprocEngine> {
        match XsltprocEngine::discover() {
            Ok(engine) => Some(engine),
            Err(_) => {
                eprintln!("xsltproc not installed, skipping");
                None
            }
        }
    }

    fn write_stylesheet(dir: &Path) -> PathBuf {
        let path = dir.join("echo.xsl");
        fs::write(&path, ECHO_LANGUAGE_XSL).unwrap();
        path
    }

    #[test]
    fn transforms_in_memory_text() {
        let Some(engine) = engine() else { return };
        let dir = tempdir().unwrap();
        let xsl = write_stylesheet(dir.path());

        let request = TransformRequest::new(
            XmlSource::Text("<Invoice><ID>42</ID></Invoice>"),
            StylesheetSource::Path(&xsl),
        );
        let html = engine.transform(&request).unwrap();
        assert!(html.contains(r#"<p id="root">Invoice</p>"#));
        assert!(!html.starts_with("<?xml"));
    }

    #[test]
    fn binds_language_parameter_verbatim() {
        let Some(engine) = engine() else { return };
        let dir = tempdir().unwrap();
        let xsl = write_stylesheet(dir.path());

        let request = TransformRequest::new(
            XmlSource::Text("<Invoice/>"),
            StylesheetSource::Path(&xsl),
        )
        .with_language(LanguageCode::new("pl"));
        let html = engine.transform(&request).unwrap();
        assert!(html.contains(r#"<p id="lang">pl</p>"#));
    }

    #[test]
    fn large_piped_inputs_do_not_deadlock() {
        let Some(engine) = engine() else { return };
        let dir = tempdir().unwrap();
        let xsl = write_stylesheet(dir.path());

        // Several times the pipe buffer size, so stdin is still being fed
        // while the processor works its end of the pipes.
        let mut xml = String::with_capacity(2 << 20);
        xml.push_str("<Invoice>");
        while xml.len() < 2 << 20 {
            xml.push_str("<Line>0123456789012345678901234567890123456789</Line>");
        }
        xml.push_str("</Invoice>");

        let request =
            TransformRequest::new(XmlSource::Text(&xml), StylesheetSource::Path(&xsl));
        let html = engine.transform(&request).unwrap();
        assert!(html.contains(r#"<p id="root">Invoice</p>"#));
    }

    #[test]
    fn missing_stylesheet_fails_before_spawning() {
        // No engine binary needed: the existence check runs first.
        let engine = XsltprocEngine::with_binary("/nonexistent/xsltproc");
        let missing = Path::new("/nonexistent/render-billing-3.xsl");
        let request =
            TransformRequest::new(XmlSource::Text("<a/>"), StylesheetSource::Path(missing));
        match engine.transform(&request) {
            Err(EngineError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_source_path_reports_not_found() {
        let Some(engine) = engine() else { return };
        let dir = tempdir().unwrap();
        let xsl = write_stylesheet(dir.path());
        let missing = dir.path().join("no-such-invoice.xml");

        let request =
            TransformRequest::new(XmlSource::Path(&missing), StylesheetSource::Path(&xsl));
        match engine.transform(&request) {
            Err(EngineError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let Some(engine) = engine() else { return };
        let dir = tempdir().unwrap();
        let xsl = write_stylesheet(dir.path());

        let request = TransformRequest::new(
            XmlSource::Text("<Invoice><unclosed></Invoice>"),
            StylesheetSource::Path(&xsl),
        );
        match engine.transform(&request) {
            Err(EngineError::Parse(_)) => {}
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn malformed_stylesheet_is_a_transform_error() {
        let Some(engine) = engine() else { return };
        let dir = tempdir().unwrap();
        let xsl = dir.path().join("broken.xsl");
        fs::write(&xsl, "<xsl:stylesheet this is not xml").unwrap();

        let request =
            TransformRequest::new(XmlSource::Text("<a/>"), StylesheetSource::Path(&xsl));
        match engine.transform(&request) {
            Err(EngineError::Transform(_)) => {}
            other => panic!("expected Transform, got {other:?}"),
        }
    }
}
