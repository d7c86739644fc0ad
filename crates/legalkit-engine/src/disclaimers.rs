//! Fixed disclaimer text wrapped around every generated document

/// Preamble shown above the title block of every document
pub const DOCUMENT_HEADER: &str = "\
⚠️ IMPORTANT DISCLAIMER: This document was generated by an automated template \
tool and is provided for general informational purposes only. It does not \
constitute legal advice, and no attorney-client relationship is created by its \
use. Laws vary by jurisdiction and change over time. We strongly recommend \
having a qualified attorney review this document before publishing or relying \
on it.";

/// Footer appended below the final horizontal rule of every document
pub const DOCUMENT_FOOTER: &str = "\
*This document was generated with LegalKit from your questionnaire answers. \
It is a template starting point, not a substitute for professional legal \
advice. Review it carefully, adapt it to your actual practices, and consult a \
qualified attorney before publication.*";
