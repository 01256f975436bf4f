use sectionx::{point, ReferencePlane, Region, Section, SectionProperties};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plane = ReferencePlane::Xy;
    let origin = point(0.0, 0.0, 0.0);
    let section = Section::new(
        plane,
        vec![Region::rectangle(plane, origin, 10.0, 20.0)],
        vec![Region::rectangle(plane, origin, 4.0, 4.0)],
    )?;

    let properties = SectionProperties::new(&section)?;
    println!("A = {:.3}", properties.area);
    println!("Istrong = {:.3}", properties.strong_inertia);
    println!("Iweak = {:.3}", properties.weak_inertia);

    Ok(())
}
