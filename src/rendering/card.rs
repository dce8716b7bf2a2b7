//! LaTeX postcards: two pages per address on 5in x 3.5in stock.
//!
//! The message page carries the salutation, the violation and note
//! summaries and the signature block. The address page carries the sender
//! block and the resident's address. Both end in `\newpage`.

use std::io::{self, Write};

use crate::domain::entities::AddressGroup;
use crate::rendering::summary::{summarize_details, summarize_violations};
use crate::rendering::template::{escape_hash, substitute};

pub const PREAMBLE: &str = r"\documentclass[10pt]{article}

\pagestyle{empty}
\setlength\parindent{0pt}
\usepackage[paperwidth=5in,
    paperheight=3.5in,
    left=0.50in,
    right=0.50in,
    top=0.450in,
    bottom=0.450in]{geometry}

\usepackage{graphicx}
\usepackage{enumitem} % for compressed lists
\usepackage{textpos} % for precise address block placement
\usepackage{needspace} % try to prevent unnecessary page breaks
\usepackage{pbox} % for making boxes for the parting lines

% Keep the signature block on the message page.
\needspace{10\baselineskip}
\clubpenalty=10
\widowpenalties 1 10000
\raggedbottom

\renewcommand{\familydefault}{\sfdefault} % default font sans serif

\begin{document}
";

pub const TRAILER: &str = r"
\end{document}
";

pub const MESSAGE_TEMPLATE: &str = r"
\begin{flushleft}
Dear City of Knoxville resident,\\[1em]
$violations
$details
\end{flushleft}
\vfill
\pbox{3in}{
Cordially,\\[.9em]
Knoxville Solid Waste Management\\
{\tiny http://knoxvilletn.gov/government/city\_departments\_offices/public\_service/solid\_waste}
}
\hfill
\pbox{1in}{
\includegraphics[width=.75in]{knxwasteqrcode}
}
\newpage
";

pub const ADDRESS_TEMPLATE: &str = r"
\begin{flushleft}
\includegraphics[width=2in]{knoxlogo}\\
Knoxville Solid Waste Management\\
400 Main St., Room 470 \\
Knoxville, TN 37902
\end{flushleft}
\vfill
\begin{textblock}{3}(5,0)
\parbox{3in}{\Large Resident\\
$address \\
Knoxville, TN 37902}
\end{textblock}
\vfill

\newpage
";

/// Fixed single card used to check printer alignment before a real run.
pub const CALIBRATION_CARD: &str = r"
\begin{flushleft}
Printer calibration card.\\[1em]
This side should print the message page of a curbside postcard with even
margins on all four edges.
\end{flushleft}
\vfill
\hfill Knoxville Solid Waste Management
\newpage

\begin{flushleft}
Knoxville Solid Waste Management\\
400 Main St., Room 470 \\
Knoxville, TN 37902
\end{flushleft}
\vfill
\begin{textblock}{3}(5,0)
\parbox{3in}{\Large Resident\\
123 Calibration Way \\
Knoxville, TN 37902}
\end{textblock}
\vfill

\newpage
";

/// Both pages of one postcard, ready to append to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub message: String,
    pub address: String,
}

/// Renders the card for one address group.
///
/// The address comes from the group's first record; `#` in it is escaped.
pub fn render_card(group: &AddressGroup) -> RenderedCard {
    let violations = summarize_violations(group).to_latex();
    let details = summarize_details(group).to_latex();

    let message = substitute(
        MESSAGE_TEMPLATE,
        &[("violations", violations.as_str()), ("details", details.as_str())],
    );

    let display_address = group.display_address();
    let escaped = escape_hash(&display_address);
    let address = substitute(ADDRESS_TEMPLATE, &[("address", escaped.as_ref())]);

    RenderedCard { message, address }
}

/// Streams a postcard document: preamble, cards in order, trailer.
///
/// Nothing is buffered beyond the writer itself. An error on any card aborts
/// the document; whatever was already written stays written.
pub struct DocumentWriter<W: Write> {
    out: W,
    cards: usize,
}

impl<W: Write> DocumentWriter<W> {
    /// Writes the preamble and returns a writer ready for cards.
    pub fn begin(mut out: W) -> io::Result<Self> {
        out.write_all(PREAMBLE.as_bytes())?;
        Ok(Self { out, cards: 0 })
    }

    pub fn write_card(&mut self, card: &RenderedCard) -> io::Result<()> {
        self.out.write_all(card.message.as_bytes())?;
        self.out.write_all(card.address.as_bytes())?;
        self.cards += 1;
        Ok(())
    }

    pub fn write_raw(&mut self, markup: &str) -> io::Result<()> {
        self.out.write_all(markup.as_bytes())
    }

    pub fn cards_written(&self) -> usize {
        self.cards
    }

    /// Writes the trailer, flushes, and hands the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(TRAILER.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Renders every group into one in-memory document.
pub fn assemble_document<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = &'a AddressGroup>,
{
    let mut document = String::from(PREAMBLE);
    for group in groups {
        let card = render_card(group);
        document.push_str(&card.message);
        document.push_str(&card.address);
    }
    document.push_str(TRAILER);
    document
}
