use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use ditto_tones::{DittoTones, GenerationResult, RampSet};

type Err = Box<dyn Error>;

fn table_of_scale(fh: &mut impl Write, res: &GenerationResult,
                  width: u32) -> Result<(), Err> {
    let sources: Vec<_> = res.sources.iter()
        .map(|s| format!("{} {:.0}%", s.name, 100. * s.weight))
        .collect();
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (shade, c) in &res.scale {
        let fg = if c.is_light() { "black" } else { "white" };
        let border = if *shade == res.matched_shade { "3px solid" }
                     else { "0px" };
        writeln!(fh, "  <td style=\"width: {width}px; height: 40px; \
                      border: {border} {fg}; color: {fg}; font-size: 9px; \
                      background-color: {}\">{shade}</td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{} {} ({})</td></tr>",
             res.input_color.to_hex(), res.method, sources.join(" + "))?;
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let colors = ["#3b82f6", "#ff6b35", "#10b981", "#8b5cf6", "#e11d48",
                  "#facc15", "#14b8a6", "#78716c", "#808080",
                  "oklch(0.45 0.2 30)", "oklch(0.8 0.1 200)"];
    let mut fh = BufWriter::new(File::create("scale.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Ditto_tones: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    for set in RampSet::ALL {
        let ditto = DittoTones::from_ramp_set(set)?;
        writeln!(fh, "<h3>{} ({} ramps)</h3>", set.name(),
                 ditto.ramp_names().len())?;
        for c in colors {
            table_of_scale(&mut fh, &ditto.generate(c)?, 50)?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
