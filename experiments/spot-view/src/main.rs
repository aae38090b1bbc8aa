use spot_base::log;
use spot_bmp::{BitmapView, BmpHeader};
use spot_camera::{StillCamera, TrackSession};
use spot_detect::ColorSignature;
use std::time::Duration;

/// Poll interval of the tracker loop.
const TRACK_INTERVAL: Duration = Duration::from_millis(1000);
const DEFAULT_TRACK_FRAMES: usize = 5;

fn usage(program: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {program} header <in.bmp>");
    eprintln!("  {program} calibrate <in.bmp>");
    eprintln!("  {program} detect <in.bmp> <out.bmp> [red green blue]");
    eprintln!("  {program} track <in.bmp> [frames] [red green blue]");
    eprintln!();
    eprintln!("Levels default to red 230, green 160, blue 210. A pixel matches when");
    eprintln!("its red is at least the red level and its green and blue are at most");
    eprintln!("the green and blue levels. Set SPOT_LOG=debug for more detail.");
    std::process::exit(1);
}

/// Reads `red green blue` from `args`, or the default levels if absent.
fn parse_signature(args: &[String]) -> Result<ColorSignature, Box<dyn std::error::Error>> {
    match args {
        [] => Ok(ColorSignature::default()),
        [red, green, blue] => Ok(ColorSignature::new(
            red.parse()?,
            green.parse()?,
            blue.parse()?,
        )),
        _ => Err(format!("expected three levels, got {}", args.len()).into()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    spot_base::init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("spot-view");
    if args.len() < 3 {
        usage(program);
    }
    let input = &args[2];

    match args[1].as_str() {
        "header" => {
            let bytes = std::fs::read(input)?;
            let header = BmpHeader::parse(&bytes)?;
            println!("{header}");
            match BitmapView::from_header(&header, &bytes[..]) {
                Ok(view) => println!(
                    "usable: {}x{} {:?}, stride {} bytes",
                    view.width(),
                    view.height(),
                    view.row_order(),
                    view.row_stride()
                ),
                Err(err) => println!("not usable: {err}"),
            }
        }
        "calibrate" => {
            let bytes = std::fs::read(input)?;
            let mut session = TrackSession::default();
            let signature = session.calibrate(&bytes)?;
            println!("{signature}");
        }
        "detect" => {
            let output = args.get(3).unwrap_or_else(|| usage(program));
            let session = TrackSession::new(parse_signature(&args[4..])?);

            let mut bytes = std::fs::read(input)?;
            match session.annotate(&mut bytes)? {
                Some(bbox) => println!("Object: {bbox}"),
                None => println!("no match for {}", session.signature()),
            }
            std::fs::write(output, &bytes)?;
            log::info!("wrote {output}");
        }
        "track" => {
            let frames = match args.get(3) {
                Some(count) => count.parse()?,
                None => DEFAULT_TRACK_FRAMES,
            };
            let levels = args.get(4..).unwrap_or(&[]);
            let session = TrackSession::new(parse_signature(levels)?);
            let mut camera = StillCamera::from_file(input)?;

            session
                .track(&mut camera, frames, TRACK_INTERVAL, |found| match found {
                    Some(bbox) => println!("Object: {bbox}"),
                    None => println!("no object"),
                })
                .await?;
        }
        _ => usage(program),
    }

    Ok(())
}
