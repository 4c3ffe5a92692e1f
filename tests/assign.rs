use colmat::reorder::{assign_columns, assign_rows, assign_select, repmat};
use colmat::{ErrorKind, Mat, MatBase, MatView, MatViewMut, Select};

#[test]
fn wildcard_columns_copy_everything() {
    let src = Mat::from_fn(3, 3, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(3, 3);
    assign_columns(&mut dest, Select::All, &src, Select::All).unwrap();
    assert_eq!(dest, src);
}

#[test]
fn wildcard_columns_require_identical_shape() {
    let src = Mat::<f64>::zeros(3, 2);
    let mut dest = Mat::<f64>::zeros(3, 3);
    let err = assign_columns(&mut dest, Select::All, &src, Select::All).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn explicit_column_reorder() {
    // dest[:, [2, 0]] = src[:, [0, 1]]: column 2 becomes c0, column 0
    // becomes c1, column 1 is untouched.
    let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::from_elem(2, 3, -1.0);
    assign_columns(&mut dest, Select::Indices(&[2, 0]), &src, Select::Indices(&[0, 1])).unwrap();
    assert_eq!(*dest.at(0, 2), 0.0);
    assert_eq!(*dest.at(1, 2), 1.0);
    assert_eq!(*dest.at(0, 0), 10.0);
    assert_eq!(*dest.at(1, 0), 11.0);
    assert_eq!(*dest.at(0, 1), -1.0);
    assert_eq!(*dest.at(1, 1), -1.0);
}

#[test]
fn wildcard_on_one_side_synthesizes_the_range() {
    let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(2, 4);
    // src side is the wildcard: columns 0, 1 in order.
    assign_columns(&mut dest, Select::Indices(&[3, 1]), &src, Select::All).unwrap();
    assert_eq!(*dest.at(0, 3), 0.0);
    assert_eq!(*dest.at(1, 3), 1.0);
    assert_eq!(*dest.at(0, 1), 10.0);
    assert_eq!(*dest.at(0, 0), 0.0);
}

#[test]
fn column_selection_validation() {
    let src = Mat::<f64>::zeros(2, 2);
    let mut dest = Mat::<f64>::zeros(2, 3);

    let err = assign_columns(&mut dest, Select::Indices(&[0]), &src, Select::Indices(&[0, 1]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);

    // An explicit empty selection is not a wildcard.
    let err = assign_columns(&mut dest, Select::Indices(&[]), &src, Select::Indices(&[]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);

    let err = assign_columns(&mut dest, Select::Indices(&[3]), &src, Select::Indices(&[0]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);

    let mut short = Mat::<f64>::zeros(1, 3);
    let err = assign_columns(&mut short, Select::All, &src, Select::All).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn explicit_row_reorder() {
    let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::from_elem(3, 2, -1.0);
    assign_rows(&mut dest, Select::Indices(&[2, 0]), &src, Select::Indices(&[0, 1])).unwrap();
    // Row 2 is src row 0, row 0 is src row 1, row 1 untouched.
    assert_eq!(*dest.at(2, 0), 0.0);
    assert_eq!(*dest.at(2, 1), 10.0);
    assert_eq!(*dest.at(0, 0), 1.0);
    assert_eq!(*dest.at(0, 1), 11.0);
    assert_eq!(*dest.at(1, 0), -1.0);
}

#[test]
fn row_reorder_requires_matching_column_counts() {
    let src = Mat::<f64>::zeros(2, 3);
    let mut dest = Mat::<f64>::zeros(2, 2);
    let err = assign_rows(&mut dest, Select::All, &src, Select::All).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn select_dispatches_to_full_copy() {
    let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(2, 2);
    assign_select(&mut dest, Select::All, Select::All, &src, Select::All, Select::All).unwrap();
    assert_eq!(dest, src);
}

#[test]
fn select_dispatches_to_column_reorder() {
    let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(2, 3);
    assign_select(
        &mut dest,
        Select::All,
        Select::Indices(&[1]),
        &src,
        Select::All,
        Select::Indices(&[0]),
    )
    .unwrap();
    assert_eq!(*dest.at(0, 1), 0.0);
    assert_eq!(*dest.at(1, 1), 1.0);
    assert_eq!(*dest.at(0, 0), 0.0);
}

#[test]
fn select_dispatches_to_row_reorder() {
    let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(3, 2);
    assign_select(
        &mut dest,
        Select::Indices(&[1]),
        Select::All,
        &src,
        Select::Indices(&[0]),
        Select::All,
    )
    .unwrap();
    assert_eq!(*dest.at(1, 0), 0.0);
    assert_eq!(*dest.at(1, 1), 10.0);
    assert_eq!(*dest.at(0, 0), 0.0);
}

#[test]
fn select_general_grid() {
    // dest[[0, 2], [1, 3]] = src[[1, 0], [0, 1]]
    let src = Mat::from_fn(2, 2, |i, j| (1 + i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(3, 4);
    assign_select(
        &mut dest,
        Select::Indices(&[0, 2]),
        Select::Indices(&[1, 3]),
        &src,
        Select::Indices(&[1, 0]),
        Select::Indices(&[0, 1]),
    )
    .unwrap();
    assert_eq!(*dest.at(0, 1), 2.0);
    assert_eq!(*dest.at(0, 3), 12.0);
    assert_eq!(*dest.at(2, 1), 1.0);
    assert_eq!(*dest.at(2, 3), 11.0);
    // Everything off the grid is untouched.
    assert_eq!(*dest.at(1, 1), 0.0);
    assert_eq!(*dest.at(0, 0), 0.0);
    assert_eq!(*dest.at(2, 2), 0.0);
}

#[test]
fn select_mixed_wildcard_rows() {
    // Row wildcard on one side only still resolves to the natural
    // range; the resolved lengths must then agree.
    let src = Mat::from_fn(2, 3, |i, j| (i + 10 * j) as f64);
    let mut dest = Mat::<f64>::zeros(2, 2);
    assign_select(
        &mut dest,
        Select::All,
        Select::Indices(&[0, 1]),
        &src,
        Select::Indices(&[0, 1]),
        Select::Indices(&[2, 0]),
    )
    .unwrap();
    assert_eq!(*dest.at(0, 0), 20.0);
    assert_eq!(*dest.at(1, 0), 21.0);
    assert_eq!(*dest.at(0, 1), 0.0);
    assert_eq!(*dest.at(1, 1), 1.0);
}

#[test]
fn select_rejects_mismatched_grids() {
    let src = Mat::<f64>::zeros(3, 3);
    let mut dest = Mat::<f64>::zeros(3, 3);
    let err = assign_select(
        &mut dest,
        Select::Indices(&[0, 1]),
        Select::Indices(&[0]),
        &src,
        Select::Indices(&[0]),
        Select::Indices(&[0]),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn select_works_across_storage_kinds() {
    let parent = Mat::from_fn(4, 4, |i, j| (i + 10 * j) as f64);
    let window = MatView::new(&parent, 1, 1, 2, 2).unwrap();
    let mut dest_parent = Mat::<f64>::zeros(4, 4);
    {
        let mut dest = MatViewMut::new(&mut dest_parent, 2, 2, 2, 2).unwrap();
        assign_columns(&mut dest, Select::Indices(&[1, 0]), &window, Select::All).unwrap();
    }
    // window columns are [11, 12] and [21, 22]; swapped into the dest
    // window at (2, 2).
    assert_eq!(*dest_parent.at(2, 3), 11.0);
    assert_eq!(*dest_parent.at(3, 3), 12.0);
    assert_eq!(*dest_parent.at(2, 2), 21.0);
    assert_eq!(*dest_parent.at(3, 2), 22.0);
}

#[test]
fn repmat_tiles_the_source() {
    let src = Mat::from_vec(2, 2, vec![1., 2., 3., 4.]).unwrap();
    let mut dest = Mat::<f64>::zeros(4, 6);
    repmat(&src, 2, 3, &mut dest).unwrap();
    for i in 0..4 {
        for j in 0..6 {
            assert_eq!(*dest.at(i, j), *src.at(i % 2, j % 2));
        }
    }
}

#[test]
fn repmat_requires_exact_multiples() {
    let src = Mat::<f64>::zeros(2, 2);
    let mut dest = Mat::<f64>::zeros(4, 5);
    let err = repmat(&src, 2, 3, &mut dest).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn select_from_slice_conversion() {
    let idx = vec![0usize, 1];
    let sel: Select<'_> = idx.as_slice().into();
    let src = Mat::from_elem(1, 2, 4.0);
    let mut dest = Mat::<f64>::zeros(1, 2);
    assign_columns(&mut dest, sel, &src, Select::All).unwrap();
    assert_eq!(*dest.at(0, 0), 4.0);
    assert_eq!(*dest.at(0, 1), 4.0);
}
