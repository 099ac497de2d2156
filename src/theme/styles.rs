//! Global CSS styles for BlockBeauty.
//!
//! Dark workspace, the gradient card in the centre and a floating toolbar
//! underneath it.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Workspace */
  --workspace-bg: #0d0d0d;
  --panel-bg: rgba(0, 0, 0, 0.2);
  --panel-border: rgba(255, 255, 255, 0.25);

  /* Popups */
  --popup-bg: #ffffff;
  --popup-text: #374151;
  --popup-hover: #f3f4f6;
  --popup-divider: #e5e7eb;

  /* Card chrome */
  --chrome-border: #9ca3af;
  --chrome-dot: #d1d5db;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-mono);
  background: var(--workspace-bg);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

/* === Layout === */
.app {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  padding: 2rem 1rem 8rem;
}

.app--mobile {
  justify-content: flex-start;
  padding: 1.25rem 20px 1rem;
  overflow-y: auto;
}

/* === Card === */
.card-frame {
  position: relative;
  z-index: 10;
}

.card {
  border-radius: 6px;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.45);
  color: var(--text-primary);
  display: flex;
}

.card__window {
  flex: 1;
  display: flex;
  flex-direction: column;
  min-height: 0;
  border: 2px solid var(--chrome-border);
  border-radius: 4px;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
  overflow: hidden;
}

.card__titlebar {
  display: flex;
  align-items: center;
  height: 32px;
  flex-shrink: 0;
  border-bottom: 2px solid var(--chrome-border);
}

.card__dot {
  width: 12px;
  height: 12px;
  margin-left: 8px;
  border-radius: 50%;
  background: var(--chrome-dot);
  box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
}

.card__filename {
  flex: 1;
  margin-right: 64px;
  background: transparent;
  border: none;
  outline: none;
  color: inherit;
  opacity: 0.8;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  font-weight: 700;
  text-align: center;
}

.card-readout {
  z-index: 10;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Resize Handles === */
.resize-handle {
  position: absolute;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  transition: background var(--transition-fast);
}

.resize-handle:hover,
.resize-handle.is-active {
  background: rgba(255, 255, 255, 0.35);
}

.resize-handle--width {
  top: 0;
  left: -40px;
  width: 4px;
  height: 100%;
  cursor: col-resize;
}

.resize-handle--height {
  left: 0;
  bottom: -20px;
  width: 100%;
  height: 4px;
  cursor: row-resize;
}

.drag-capture {
  position: fixed;
  inset: 0;
  z-index: 1000;
  user-select: none;
}

.drag-capture--width { cursor: col-resize; }
.drag-capture--height { cursor: row-resize; }

/* === Code Editor === */
.code-editor {
  position: relative;
  flex: 1;
  display: flex;
  min-height: 0;
  overflow: auto;
  font-weight: 600;
  letter-spacing: 0.025em;
  line-height: 1.45;
}

.code-editor__stack {
  position: relative;
  flex: 1;
  min-height: 100%;
}

.code-editor__highlight,
.code-editor__input {
  padding: 10px 12px;
  font: inherit;
  letter-spacing: inherit;
  line-height: inherit;
  white-space: pre;
  tab-size: 4;
}

.code-editor__highlight {
  pointer-events: none;
}

.code-editor__input {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  resize: none;
  border: none;
  outline: none;
  background: transparent;
  color: transparent;
  overflow: hidden;
}

.code-editor--wrap .code-editor__highlight,
.code-editor--wrap .code-editor__input {
  white-space: pre-wrap;
  word-break: break-all;
}

.code-line {
  min-height: 1.45em;
}

.code-editor__minimap {
  flex: 0 0 72px;
  overflow: hidden;
  opacity: 0.6;
  pointer-events: none;
}

.code-editor__minimap pre {
  transform: scale(0.2);
  transform-origin: top left;
  width: 500%;
  padding: 10px 0 0 8px;
  white-space: pre;
}

/* === Toolbar === */
.toolbar {
  position: absolute;
  bottom: 5rem;
  z-index: 20;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 2rem;
  border: 2px solid var(--panel-border);
  border-radius: 6px;
  background: var(--panel-bg);
}

.app--mobile .toolbar {
  position: static;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem;
}

/* === Buttons === */
.btn-outline,
.btn-chip,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-mono);
  font-weight: 500;
  color: inherit;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-outline {
  padding: 0.625rem 1.25rem;
  border: 2px solid var(--text-primary);
  border-radius: 8px;
  background: transparent;
  font-size: var(--text-sm);
}

.btn-chip {
  padding: 0.25rem 0.5rem;
  border: 2px solid currentColor;
  border-radius: 8px;
  background: transparent;
  font-size: var(--text-sm);
}

.btn-ghost {
  padding: 0.25rem 0.5rem;
  border: none;
  background: transparent;
}

.btn-outline:hover,
.btn-chip:hover,
.btn-ghost:hover {
  background: rgba(0, 0, 0, 0.3);
}

.btn-chip.is-active {
  background: rgba(255, 255, 255, 0.2);
}

.btn-outline:disabled,
.btn-chip:disabled,
.btn-ghost:disabled {
  opacity: 0.4;
  cursor: default;
}

.chevron {
  width: 10px;
  height: 6px;
}

/* === Padding Row === */
.padding-picker {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.625rem 1.25rem;
  border: 2px solid var(--text-primary);
  border-radius: 8px;
  font-size: var(--text-sm);
  font-weight: 500;
}

/* === Pickers === */
.picker {
  position: relative;
  display: flex;
  flex-direction: column;
}

.picker.is-open {
  z-index: 50;
}

.picker-backdrop {
  position: fixed;
  inset: 0;
  z-index: 40;
}

.picker-popup {
  position: absolute;
  left: 0;
  z-index: 50;
  min-width: 12rem;
  padding: 0.5rem 0;
  border-radius: 8px;
  background: var(--popup-bg);
  color: var(--popup-text);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
  font-size: var(--text-sm);
}

.picker-popup--closed { display: none; }
.picker-popup--down { top: calc(100% + 4px); }
.picker-popup--up { bottom: calc(100% + 4px); }

.picker-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  width: 24rem;
  list-style: none;
}

.picker-list {
  max-height: 16rem;
  overflow-y: auto;
  list-style: none;
}

.picker-option {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.625rem 1.25rem;
  cursor: pointer;
  white-space: nowrap;
}

.picker-option:hover {
  background: var(--popup-hover);
}

.picker-option.is-active {
  font-weight: 700;
}

/* === Swatch === */
.swatch {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
}

.swatch__dot {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 50%;
}

/* === Dimension Picker === */
.dimension-popup {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  width: 18rem;
}

.dimension-popup__row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.dimension-popup__slider {
  flex: 1;
}

.dimension-popup__input {
  width: 5rem;
  padding: 0.25rem 0.5rem;
  border: 1px solid var(--popup-divider);
  border-radius: 4px;
  font-family: var(--font-mono);
  text-align: right;
}

.dimension-popup__presets {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 0.25rem;
}

.dimension-popup__presets .btn-chip {
  justify-content: center;
  border-width: 1px;
  font-size: var(--text-xs);
}

.dimension-popup__bounds {
  display: flex;
  justify-content: space-between;
  color: var(--text-muted);
  font-size: var(--text-xs);
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    transition-duration: 0.01ms !important;
  }
}
"#;
